pub mod teams {
    /// Cron expression for the teams job
    /// Runs weekly on Monday at 03:00, squads only change between transfer windows
    pub const CRON_EXPRESSION: &str = "0 0 3 * * Mon";
}

pub mod standings {
    /// Cron expression for the standings job
    /// Runs every 6 hours at the top of the hour (00:00, 06:00, 12:00, 18:00)
    pub const CRON_EXPRESSION: &str = "0 0 */6 * * *";
}

pub mod matches {
    /// Cron expression for the matches job
    /// Runs every hour at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}
