use create_tambo_app::launcher::forwarded_from_argv;
use create_tambo_app::{InheritSpawner, Launcher, PathResolver};

#[tokio::main]
async fn main() {
    // Raw argv capture — every token after the program name is payload
    // for the delegated tool, including `--`, `--help`, and `-V`. No
    // option lexer sits between the caller and the child.
    let forwarded = forwarded_from_argv(std::env::args_os());

    setup_logging();

    let launcher = Launcher::new(PathResolver, InheritSpawner);
    let code = match launcher.run(&forwarded).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("create-tambo-app: {err}");
            err.exit_code()
        }
    };

    std::process::exit(code);
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr — stdout belongs to the delegated tool. The filter
/// comes from `CREATE_TAMBO_APP_LOG` and defaults to `warn`, so a normal
/// run produces no launcher output of its own.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("CREATE_TAMBO_APP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
