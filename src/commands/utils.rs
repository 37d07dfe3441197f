/// Display version information
pub fn display_version() {
    println!("NCAA Scorers v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Scrapes the NCAA D1 men's soccer goals-per-game leaderboard,");
    println!("saves a dated CSV and charts the leaders.");
}
