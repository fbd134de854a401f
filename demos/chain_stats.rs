use chain_hash::Config;
use chain_hash::DefaultHashMap;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: u64,

    #[arg(short = 'c', long = "initial_capacity", default_value_t = 8)]
    initial_capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = 0.75)]
    load_factor: f64,
}

fn main() -> Result<(), chain_hash::Error> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::default()
        .with_initial_capacity(args.initial_capacity)
        .with_load_factor(args.load_factor);
    let mut map: DefaultHashMap<u64, u64> = DefaultHashMap::with_config(config)?;

    println!(
        "Created map with {} buckets, load factor {}",
        map.capacity(),
        map.load_factor()
    );
    println!("Inserting {} entries...", args.entries);

    for i in 0..args.entries {
        map.insert(i, i.wrapping_mul(31));
    }

    println!(
        "Inserted {} entries into {} buckets",
        map.len(),
        map.capacity()
    );
    println!(
        "Final load factor: {:.2}",
        map.len() as f64 / map.capacity() as f64
    );

    map.chain_histogram().print();
    map.debug_stats().print();

    for i in (0..args.entries).step_by(2) {
        map.remove(&i)?;
    }
    println!(
        "After removing every other key: {} entries, {} buckets",
        map.len(),
        map.capacity()
    );
    map.chain_histogram().print();

    Ok(())
}
