use cdb_hash::{CdbHash, djb_hash, djb_hash_units};

fn main() -> anyhow::Result<()> {
    for key in ["one", "two", "three"] {
        let h = djb_hash(key.as_bytes());
        // First-level table slot, as the cdb format derives it.
        println!("{key}: hash {h:#010x}, table {}", h & 255);
    }

    println!("via byte view: {:#010x}", "one".cdb_hash());

    let units: Vec<u32> = "one".chars().map(u32::from).collect();
    println!("via checked units: {:#010x}", djb_hash_units(&units)?);

    Ok(())
}
