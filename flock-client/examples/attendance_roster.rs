// flock-client/examples/attendance_roster.rs
// Prints the attendance roster for an event and marks one member present.

use flock_client::{ClientConfig, RosterController, SessionContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <username> <password> <event_id> [search]", args[0]);
        println!("  Example: {} admin secret 12 tan", args[0]);
        return Ok(());
    }

    let username = &args[1];
    let password = &args[2];
    let event_id: i64 = args[3].parse()?;
    let search = args.get(4).cloned().unwrap_or_default();

    let base_url =
        std::env::var("FLOCK_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let mut session = SessionContext::new(ClientConfig::new(base_url));
    let me = session.login(username, password).await?;
    tracing::info!("Logged in as: {}", me.user().display_name());

    let http = session
        .client()
        .expect("just logged in")
        .clone();

    let event = http.view_event(event_id).await?;
    println!("{} ({} {})", event.name, event.date, event.time);

    let mut roster = RosterController::new(Some(event_id));
    roster.set_search(search);
    roster.refresh(&http).await?;

    for row in roster.rows() {
        let mark = if roster.is_selected(row.member.id) { "x" } else { " " };
        println!("[{mark}] {:>5}  {}", row.member.id, row.member.display_name());
    }
    println!(
        "page {}/{}, {} marked on this roster",
        roster.current_page(),
        roster.last_page(),
        roster.selection().len()
    );

    // Mark the first unmarked row, if any.
    let next_unmarked = roster
        .rows()
        .iter()
        .find(|r| !r.is_marked)
        .map(|r| r.member.id);
    if let Some(id) = next_unmarked {
        match roster.toggle(&http, id).await {
            Ok(now) => println!("toggled {id}: marked={now}"),
            Err(e) => tracing::error!("Failed to toggle {id}: {e}"),
        }
    }

    session.logout().await?;
    Ok(())
}
