use std::io;
use std::process;

use hoteldesk::config::Config;
use hoteldesk::db::Db;
use hoteldesk::menu;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: hoteldesk <database>");
        process::exit(1);
    }

    greeting();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    println!("Connecting to database...");
    let mut db = match Db::open(&args[1]) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Unable to connect to database: {e}");
            process::exit(1);
        }
    };
    println!("Done");

    info!("starting hoteldesk session");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    if let Err(e) = menu::run(&mut db, &mut input, &config) {
        eprintln!("{e}");
    }

    println!("Disconnecting from database...Done");
    println!();
    println!("Bye!");
}

fn greeting() {
    println!(
        "\n*******************************************************\n\
         *              Hotel Front Desk                       *\n\
         *******************************************************\n"
    );
}
