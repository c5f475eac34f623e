use clap::Parser;
use probe_hash::HashTable;
use probe_hash::sizing;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = sizing::DEFAULT_LOAD_FACTOR)]
    load_factor: f64,

    /// Spacing between consecutive keys; multiples of large powers of two
    /// stress the mixer.
    #[arg(short = 's', long = "stride", default_value_t = 1)]
    stride: i64,
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashTable with target capacity: {} (load factor {})",
        args.target_capacity, args.load_factor
    );

    let mut table: HashTable<i64, ()> =
        match HashTable::with_capacity_and_load_factor(args.target_capacity, args.load_factor) {
            Ok(table) => table,
            Err(error) => {
                eprintln!("Could not create the table: {error}");
                std::process::exit(1);
            }
        };

    println!("Actual capacity: {}", table.capacity());
    println!("Buffer size: {}", table.buffer_size());
    println!("Filling table with i64 keys...");

    let mut num_failures = 0;
    let mut num_duplicates = 0;
    let num_values = table.capacity();
    for i in 1..=num_values as i64 {
        let key = i.wrapping_mul(args.stride);
        let index = table.index_of(key);
        if table.index_exists(index) {
            num_duplicates += 1;
            continue;
        }
        if table.try_index_insert(index, key, ()).is_err() {
            num_failures += 1;
        }
    }

    println!(
        "Inserted {} keys into table ({num_duplicates} duplicates skipped)",
        table.len()
    );
    println!(
        "Final load factor: {:.2}%",
        (table.len() as f64 / table.buffer_size() as f64) * 100.0
    );

    table.probe_histogram().print();
    table.debug_stats().print();
    println!(
        "Number of failed try_index_insert attempts: {} ({:.02}%)",
        num_failures,
        num_failures as f64 / num_values.max(1) as f64 * 100.0
    );
}
