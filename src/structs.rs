use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Create the database and tables, then exit.
    #[arg(long)]
    pub create_database: bool,
    /// Generate a self-signed key and certificate file before booting.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String
}
