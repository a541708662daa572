use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "workout server")]
pub struct Cli {
    #[clap(long, env, default_value = "workouts.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// How long a connection waits on a locked database before giving up
    #[arg(long, env, default_value = "5000")]
    pub busy_timeout_ms: u64,
    #[arg(long, env, default_value = "16")]
    pub pool_max_size: usize,
    /// Requests taking longer than this are answered with 408
    #[arg(long, env, default_value = "30")]
    pub request_timeout_secs: u64,
}
