//! Configuration and constants for the scraper.

/// Leaderboard base URL (page identifiers are appended)
pub const DEFAULT_BASE_URL: &str = "https://www.ncaa.com/stats/soccer-men/d1/current/individual/5/";

/// Page identifiers for the paginated leaderboard
pub const DEFAULT_PAGES: &[&str] = &["p1", "p2", "p3", "p4", "p5"];

/// User agent sent with every page request
pub const USER_AGENT: &str = concat!("ncaa-scorers/", env!("CARGO_PKG_VERSION"));

// Column names as they appear in the scraped table header
pub const NAME_COLUMN: &str = "Name";
pub const TEAM_COLUMN: &str = "Team";
pub const GOALS_COLUMN: &str = "Goals";
pub const GAMES_COLUMN: &str = "Games";
pub const RATE_COLUMN: &str = "Per Game";

/// Columns coerced to numbers after aggregation
pub const NUMERIC_COLUMNS: &[&str] = &[GOALS_COLUMN, RATE_COLUMN, GAMES_COLUMN];

/// Dated output file: `<prefix><YYYY-MM-DD>.<ext>`
pub const OUTPUT_FILE_PREFIX: &str = "ncaa_goal_scorers_stats_";
pub const OUTPUT_FILE_EXTENSION: &str = "csv";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of leading records highlighted as top performers
pub const TOP_PERFORMER_COUNT: usize = 3;

/// Groups larger than this are labelled "<n> Players"
pub const MAX_NAMED_GROUP: usize = 2;

// Marker sizes (diameter in px)
pub const MARKER_SIZE_TOP: u32 = 20;
pub const MARKER_SIZE_DEFAULT: u32 = 16;

// Chart titles
pub const TABLE_TITLE: &str = "Top NCAA Goal Scorers";
pub const SCATTER_TITLE: &str = "Goals Per Game vs. Games Played (Player Counts and Names)";
pub const CALLOUT_TEXT: &str = "NCAA Most Dangerous Goal Scorers";

// Chart file names written to the chart directory
pub const TABLE_CHART_FILE: &str = "ncaa_goal_scorers_table.svg";
pub const SCATTER_CHART_FILE: &str = "ncaa_goal_scorers_scatter.svg";
