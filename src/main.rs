// src/main.rs

use std::env;
use std::process;

use repoheat::decay::{generate_series, HalfLifeModel, MaterialComposition};
use repoheat::fit::fit_polynomial;
use repoheat::input::{parse_input_deck, read_assembly_records};
use repoheat::temperature::GeometryQuery;
use repoheat::Result;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <deck.yaml> <inventory.dat>", args[0]);
        process::exit(2);
    }
    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(deck_path: &str, inventory_path: &str) -> Result<()> {
    let deck = parse_input_deck(deck_path)?;
    let records = read_assembly_records(inventory_path)?;

    let initial = MaterialComposition::from_records(deck.scenario.assembly_id, &records)?;
    println!(
        "assembly {}: {} nuclides, {:.1} g",
        deck.scenario.assembly_id,
        initial.len(),
        initial.total_mass()
    );

    let model = HalfLifeModel::reference();
    let series = generate_series(&model, &initial, deck.scenario.years)?;
    println!(
        "decay heat over {} months: {:.2} W at discharge, {:.2} W at end",
        series.len(),
        series.watts()[0],
        series.watts()[series.len() - 1]
    );
    if !series.is_non_increasing() {
        println!("warning: decay-heat series is not monotonically non-increasing");
    }

    let source = fit_polynomial(&series, deck.scenario.fit_order)?;
    println!(
        "order-{} source fit over [{:.0}, {:.0}] months, coefficients {:?}",
        source.order(),
        source.t_min(),
        source.t_max(),
        source.coefficients()
    );

    for point in &deck.queries {
        let query = GeometryQuery {
            x: point.x,
            y: point.y,
            z: point.z,
            t: point.t,
            medium: deck.medium,
            canister: deck.canister,
            strength: deck.source,
            source: &source,
        };
        let temperature = query.evaluate(point.geometry)?;
        println!(
            "{:?} source at ({:.2}, {:.2}, {:.2}) m, t = {:.1} months: {:.4} K",
            point.geometry, point.x, point.y, point.z, point.t, temperature
        );
    }
    Ok(())
}
