use pubsuffix::{resolve, IdnaOption};
use tracing_subscriber::EnvFilter;

/// Print the public suffix of each host given on the command line.
///
/// Use the RUST_LOG environment variable to enable logging, e.g.
///   RUST_LOG=pubsuffix=debug
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .try_init()
        .ok();

    let hosts: Vec<String> = std::env::args().skip(1).collect();
    if hosts.is_empty() {
        eprintln!("usage: pubsuffix <host>...");
        std::process::exit(2);
    }

    for host in hosts {
        println!("{}", host);
        match resolve(&host, IdnaOption::IDNA2008_ASCII, IdnaOption::IDNA2008_UNICODE) {
            Ok(suffix) => {
                println!("  suffix:      {}", suffix);
                println!("  section:     {}", suffix.section());
                println!("  labels:      {}", suffix.label_count());
                println!("  resolvable:  {}", suffix.is_resolvable());
                println!("  ascii:       {}", suffix.clone().to_ascii());
                println!("  unicode:     {}", suffix.clone().to_unicode());
                if suffix.is_transitional_different() {
                    println!("  note: transitional IDNA processing gives a different result");
                }
            }
            Err(e) => println!("  ✗ Error: {}", e),
        }
    }
}
