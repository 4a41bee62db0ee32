//! Drive the invitation flow against a running server.
//!
//! Usage: cargo run --example rsvp_walkthrough -- http://localhost:3000

use invite_client::flow::QUIET_INTERVAL;
use invite_client::{ClientConfig, HttpClient, InvitationFlow, Language};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let client = HttpClient::new(&ClientConfig::new(base_url))?;

    let mut flow = InvitationFlow::new();
    flow.choose_language(Language::English)?;

    // Simulate typing a last name; a real UI would schedule the ticket
    // through a Debouncer instead of sleeping inline.
    if let Some(ticket) = flow.input_changed("Popescu")? {
        tokio::time::sleep(QUIET_INTERVAL).await;
        let mut follow_up = flow.run_search(&client, ticket).await?;
        while let Some(ticket) = follow_up {
            follow_up = flow.run_search(&client, ticket).await?;
        }
    }

    println!("matches for {:?}:", flow.search().input());
    for guest in flow.search().options() {
        println!("  {} {} (#{})", guest.first_name, guest.last_name, guest.id);
    }

    if let Some(first) = flow.search().options().first().cloned() {
        flow.option_selected(first.id)?;
        flow.view_invitation()?;
        flow.confirm(&client).await?;
        println!("flow state after confirm: {:?}", flow.state());
    }

    Ok(())
}
