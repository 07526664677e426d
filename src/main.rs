use clearsay::{config, VoiceAgent};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut agent = VoiceAgent::new()?;

    let transcript = [
        "My knee hurts, um, I think it's... [noise]... arthritis? \
         I take, uh, Glucophage... no, wait, Ibuprofen for it.",
        "It started like, uh, last Tuesday? No, wait, two Tuesdays ago.",
        "I've been taking... [pause]... um, propanol? No, pro-pran-o-lol for the shakes.",
        "My heart feels fluttery when I take this. Should I double the dose?",
        "I have severe chest pain and I can't breathe properly",
    ];

    for raw in transcript {
        let outcome = agent.process(raw);

        println!("Heard:   {raw}");
        println!("Cleaned: {}", outcome.cleaned_text);
        for correction in &outcome.metadata.corrections {
            println!("Fixed:   {} -> {}", correction.before, correction.after);
        }
        println!(
            "Risk:    {} ({})",
            outcome.safety.level.as_str(),
            outcome.safety.reason
        );
        if !outcome.should_respond {
            println!("Agent:   {}", outcome.safety.message);
        }
        println!();
    }

    println!(
        "Session: {}",
        serde_json::to_string_pretty(agent.state())?
    );

    Ok(())
}
