use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_nicknames::DatabaseStructureConfigNicknames;
use crate::config::structs::database_structure_config_players::DatabaseStructureConfigPlayers;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                api_key: String::from("MyApiKey"),
                prometheus_id: String::from("guesstats"),
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 0.3
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
                persistent: false,
            },
            database_structure: DatabaseStructureConfig {
                players: DatabaseStructureConfigPlayers {
                    table_name: String::from("players"),
                    column_identity: String::from("identity"),
                    column_total_games: String::from("total_games"),
                    column_games_won: String::from("games_won"),
                    column_games_lost: String::from("games_lost"),
                    column_wins_prefix: String::from("won_in_"),
                    column_updated: String::from("updated")
                },
                nicknames: DatabaseStructureConfigNicknames {
                    table_name: String::from("nicknames"),
                    column_identity: String::from("identity"),
                    column_nickname: String::from("nickname")
                }
            },
            api_server: vec!(
                ApiServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    real_ip: String::from("X-Real-IP"),
                    trusted_proxies: false,
                    keep_alive: 60,
                    request_timeout: 30,
                    disconnect_timeout: 30,
                    max_connections: 25000,
                    threads: available_parallelism().unwrap().get() as u64,
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from(""),
                    tls_connection_rate: 256
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let mut config = Configuration::init();
        match Configuration::load_file("config.toml") {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&config).unwrap();
                let save_file = Configuration::save_file("config.toml", config_toml);
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(config.clone());
        Ok(config)
    }

    pub fn validate(config: Configuration) {
        // Check Map
        let check_map = vec![
            ("[DB: players]", config.database_structure.players.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: players] Column: identity", config.database_structure.players.column_identity.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: players] Column: total_games", config.database_structure.players.column_total_games.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: players] Column: games_won", config.database_structure.players.column_games_won.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: players] Column: games_lost", config.database_structure.players.column_games_lost.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: players] Column prefix: wins", config.database_structure.players.column_wins_prefix.clone(), r"^[a-z_][a-z0-9_]{0,28}$".to_string()),
            ("[DB: players] Column: updated", config.database_structure.players.column_updated.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: nicknames]", config.database_structure.nicknames.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: nicknames] Column: identity", config.database_structure.nicknames.column_identity.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: nicknames] Column: nickname", config.database_structure.nicknames.column_nickname.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
        ];

        // Validation
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex);
        }
    }

    pub fn validate_value(name: &str, value: String, regex: String)
    {
        let regex_check = Regex::new(regex.as_str()).unwrap();
        if !regex_check.is_match(value.as_str()){
            panic!("[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check);
        }
    }
}
