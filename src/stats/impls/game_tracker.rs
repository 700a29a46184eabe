use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::game_tracker::GameTracker;

impl GameTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            players: self.stats.players.load(Ordering::SeqCst),
            nicknames: self.stats.nicknames.load(Ordering::SeqCst),
            games_recorded: self.stats.games_recorded.load(Ordering::SeqCst),
            wins_recorded: self.stats.wins_recorded.load(Ordering::SeqCst),
            losses_recorded: self.stats.losses_recorded.load(Ordering::SeqCst),
            tcp4_connections_handled: self.stats.tcp4_connections_handled.load(Ordering::SeqCst),
            tcp4_api_handled: self.stats.tcp4_api_handled.load(Ordering::SeqCst),
            tcp4_not_found: self.stats.tcp4_not_found.load(Ordering::SeqCst),
            tcp4_failure: self.stats.tcp4_failure.load(Ordering::SeqCst),
            tcp6_connections_handled: self.stats.tcp6_connections_handled.load(Ordering::SeqCst),
            tcp6_api_handled: self.stats.tcp6_api_handled.load(Ordering::SeqCst),
            tcp6_not_found: self.stats.tcp6_not_found.load(Ordering::SeqCst),
            tcp6_failure: self.stats.tcp6_failure.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::Players => {
                if value > 0 { self.stats.players.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.players.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Nicknames => {
                if value > 0 { self.stats.nicknames.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.nicknames.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::GamesRecorded => {
                if value > 0 { self.stats.games_recorded.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.games_recorded.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::WinsRecorded => {
                if value > 0 { self.stats.wins_recorded.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.wins_recorded.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::LossesRecorded => {
                if value > 0 { self.stats.losses_recorded.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.losses_recorded.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::TimestampConsole => {
                if value > 0 { self.stats.timestamp_run_console.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.timestamp_run_console.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp4NotFound => {
                if value > 0 { self.stats.tcp4_not_found.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp4_not_found.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp4Failure => {
                if value > 0 { self.stats.tcp4_failure.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp4_failure.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp4ConnectionsHandled => {
                if value > 0 { self.stats.tcp4_connections_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp4_connections_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp4ApiHandled => {
                if value > 0 { self.stats.tcp4_api_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp4_api_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp6NotFound => {
                if value > 0 { self.stats.tcp6_not_found.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp6_not_found.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp6Failure => {
                if value > 0 { self.stats.tcp6_failure.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp6_failure.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp6ConnectionsHandled => {
                if value > 0 { self.stats.tcp6_connections_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp6_connections_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Tcp6ApiHandled => {
                if value > 0 { self.stats.tcp6_api_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.tcp6_api_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
        }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::Players => {
                self.stats.players.store(value, Ordering::SeqCst);
            }
            StatsEvent::Nicknames => {
                self.stats.nicknames.store(value, Ordering::SeqCst);
            }
            StatsEvent::GamesRecorded => {
                self.stats.games_recorded.store(value, Ordering::SeqCst);
            }
            StatsEvent::WinsRecorded => {
                self.stats.wins_recorded.store(value, Ordering::SeqCst);
            }
            StatsEvent::LossesRecorded => {
                self.stats.losses_recorded.store(value, Ordering::SeqCst);
            }
            StatsEvent::TimestampConsole => {
                self.stats.timestamp_run_console.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp4NotFound => {
                self.stats.tcp4_not_found.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp4Failure => {
                self.stats.tcp4_failure.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp4ConnectionsHandled => {
                self.stats.tcp4_connections_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp4ApiHandled => {
                self.stats.tcp4_api_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp6NotFound => {
                self.stats.tcp6_not_found.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp6Failure => {
                self.stats.tcp6_failure.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp6ConnectionsHandled => {
                self.stats.tcp6_connections_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::Tcp6ApiHandled => {
                self.stats.tcp6_api_handled.store(value, Ordering::SeqCst);
            }
        }
        self.get_stats()
    }
}
