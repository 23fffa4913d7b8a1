//! Fill in an order and submit it
//!
//! Without arguments the order goes to a local echo server started on a free
//! port. Pass a YAML config file to submit elsewhere:
//!
//! ```text
//! cargo run --example place_order -- client.yaml
//! ```

use cat_corner::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ClientConfig::from_yaml_file(&path)?,
        None => {
            let addr = EchoServer::new().spawn("127.0.0.1:0").await?;
            ClientConfig::new(format!("http://{}{}", addr, ECHO_PATH))
        }
    };
    tracing::info!(endpoint = %config.endpoint, "Submitting to");

    let bus = EventBus::default();
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(envelope) = events.recv().await {
            tracing::debug!(kind = envelope.event.event_kind(), event = ?envelope.event, "Form changed");
        }
    });

    let mut session = FormSession::new().with_event_bus(bus);

    println!("🐈 Cat Corner\n");
    session.set(OrderField::Type, 3)?;
    session.set(OrderField::Color, 4)?;
    session.set(OrderField::Age, 6)?;

    let presentation = session.set(OrderField::SpecialRequest, true)?;
    if presentation.show_special_options {
        session.set(OrderField::HairLength, 1)?;
        session.set(OrderField::Hypoallergenic, true)?;
    }

    session.set(OrderField::Name, "Trang Nguyen")?;
    session.set(OrderField::StreetAddress, "12 Queen St W")?;
    session.set(OrderField::City, "Toronto")?;
    let presentation = session.set(OrderField::PostalCode, "M5H 2N2")?;
    println!("Place Order enabled: {}", presentation.submit_enabled);

    let transport = HttpTransport::new(&config)?;
    match session.submit(&transport).await {
        Ok(message) => println!("✅ Thank you! {}", message),
        Err(e) => println!("❌ No confirmation: {}", e),
    }

    Ok(())
}
