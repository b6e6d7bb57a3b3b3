use std::env;
use std::io::Write;

use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use shipping_fixtures::generators::{
    addresses, customs, parcels, pickups, reports, shipments, trackers,
};
use shipping_fixtures::{AddressRelationship, ParamMap, random, setup_logging};

const USAGE: &str =
    "Usage: shipping-fixtures <address|parcel|shipment|customs-info|pickup|report|tracker> [count]";

fn main() -> Result<()> {
    setup_logging()?;

    let kind = env::args().nth(1).ok_or_else(|| anyhow::anyhow!(USAGE))?;
    let count: usize = match env::args().nth(2) {
        Some(raw) => raw.parse()?,
        None => 1,
    };

    let mut rng = StdRng::from_entropy();
    let maps = generate(&kind, count, &mut rng)?;
    tracing::debug!("generated {count} {kind} payload(s)");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for map in maps {
        serde_json::to_writer(&mut out, &Value::Object(map))?;
        writeln!(out)?;
    }

    Ok(())
}

fn generate(kind: &str, count: usize, rng: &mut impl Rng) -> Result<Vec<ParamMap>> {
    let mut maps = Vec::with_capacity(count);
    for _ in 0..count {
        maps.push(match kind {
            "address" => addresses::random_map(None, None, rng)?,
            "parcel" => parcels::random_map(rng),
            "shipment" => {
                shipments::random_map(random::pick(&AddressRelationship::ALL, rng), rng)?
            }
            "customs-info" => customs::info_map(rng)?,
            "pickup" => pickups::random_map(rng)?,
            "report" => reports::random_map(rng),
            "tracker" => trackers::random_map(rng)?,
            other => bail!("unknown payload kind: {other}\n{USAGE}"),
        });
    }
    Ok(maps)
}
