//! Demonstration scenario for the zoo keeping library.
//!
//! 1. create animals of each category
//! 2. house them in enclosures matching their environment
//! 3. create staff and assign responsibilities by role
//! 4. feed, clean and examine, including the refused cases

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use zoo_core::{
    Animal, AnimalCategory, Enclosure, Environment, Role, Staff, ZooError, ZooResult,
};

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    run().context("zoo demo failed")?;
    tracing::info!("zoo demo finished");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn section(title: &str) {
    println!();
    println!("=== {} ===", title);
}

/// Print the outcome of an action that is expected to be refused.
fn expect_refusal<T>(label: &str, result: Result<T, impl Into<ZooError>>) {
    match result {
        Ok(_) => println!("{}: unexpectedly succeeded", label),
        Err(err) => {
            let err: ZooError = err.into();
            println!("{}: refused - {}", label, err);
        }
    }
}

/// Build an enclosure from a roster entry naming its environment.
fn enclosure(
    name: &str,
    size_sqm: f64,
    environment: &str,
    capacity: usize,
) -> ZooResult<Enclosure> {
    let environment: Environment = environment.parse()?;
    Ok(Enclosure::new(name.into(), size_sqm, environment, capacity)?)
}

/// Build a staff member from a roster entry naming their role.
fn staff_member(staff_id: &str, name: &str, role: &str) -> ZooResult<Staff> {
    let role: Role = role.parse()?;
    Ok(Staff::new(staff_id.into(), name.into(), role)?)
}

fn run() -> ZooResult<()> {
    section("Animals");
    let ellie = Animal::new(
        "Ellie".into(),
        "elephant".into(),
        5,
        "Herbivore".into(),
        AnimalCategory::Mammal,
    )?;
    let mut peta = Animal::new(
        "Peta".into(),
        "parrot".into(),
        2,
        "Omnivore".into(),
        AnimalCategory::Bird,
    )?;
    let tilly = Animal::new(
        "Tilly".into(),
        "turtle".into(),
        25,
        "Omnivore".into(),
        AnimalCategory::Reptile,
    )?;
    let fred = Animal::new(
        "Fred".into(),
        "tree frog".into(),
        10,
        "Carnivore".into(),
        AnimalCategory::Other {
            sound: Some("ribbit".into()),
        },
    )?;

    for animal in [&ellie, &peta, &tilly, &fred] {
        println!("{}", animal);
        println!("  {}", animal.make_sound());
    }
    println!("{}", ellie.eat("hay")?);
    println!("{}", tilly.sleep(None)?);
    println!("{}", fred.sleep(Some(14))?);
    expect_refusal("Ellie eats nothing", ellie.eat(""));
    expect_refusal("Fred sleeps zero hours", fred.sleep(Some(0)));

    section("Enclosures");
    let mut plains = enclosure("Sunset Plains", 2500.0, "savannah", 3)?;
    let mut lagoon = enclosure("Blue Lagoon", 800.0, "aquatic", 1)?;
    let mut canopy = enclosure("Canopy Dome", 450.0, "rainforest", 4)?;
    let mut aviary = enclosure("Tropic Aviary", 300.0, "tropical", 2)?;
    expect_refusal("Build a swamp", enclosure("Bog", 50.0, "swamp", 2));

    plains.add_animal(ellie)?;
    lagoon.add_animal(tilly)?;
    canopy.add_animal(fred)?;
    for enclosure in [&plains, &lagoon, &canopy] {
        println!("{}", enclosure.report_status());
    }

    let nemo = Animal::new(
        "Nemo".into(),
        "clownfish".into(),
        1,
        "Omnivore".into(),
        AnimalCategory::Other { sound: None },
    )?;
    expect_refusal("Nemo joins the full lagoon", lagoon.add_animal(nemo));

    let zara = Animal::new(
        "Zara".into(),
        "zebra".into(),
        4,
        "Herbivore".into(),
        AnimalCategory::Mammal,
    )?;
    let zara = match canopy.add_animal(zara) {
        Ok(()) => None,
        Err(rejected) => {
            println!("Zara in the rainforest: refused - {}", rejected);
            Some(rejected.into_animal())
        }
    };
    if let Some(zara) = zara {
        plains.add_animal(zara)?;
        println!("Zara moved to {} instead.", plains.name());
    }

    section("Staff");
    let mut sam = staff_member("Z001", "Sam Keeper", "Zookeeper")?;
    let mut lee = staff_member("V001", "Dr. Lee", "Veterinarian")?;
    expect_refusal("Hire a vet", staff_member("V002", "Dr. Ng", "vet"));

    sam.assign_enclosure(&plains);
    sam.assign_enclosure(&aviary);
    sam.assign_enclosure(&plains);
    if let Some(ellie) = plains.animal("Ellie") {
        sam.assign_animal(ellie);
    }
    lee.assign_animal(&peta);
    println!(
        "{} ({}) looks after enclosures {:?} and animals {:?}",
        sam.name(),
        sam.role(),
        sam.assigned_enclosures(),
        sam.assigned_animals()
    );
    println!(
        "{} ({}) looks after animals {:?}",
        lee.name(),
        lee.role(),
        lee.assigned_animals()
    );

    if let Some(ellie) = plains.animal("Ellie") {
        println!("{}", sam.feed_animal(ellie, "watermelon")?);
        expect_refusal("Dr. Lee feeds Ellie", lee.feed_animal(ellie, "hay"));
    }
    println!("{}", sam.clean_enclosure(&mut plains)?);
    expect_refusal("Dr. Lee cleans the lagoon", lee.clean_enclosure(&mut lagoon));

    section("Health checks");
    println!(
        "{}",
        lee.perform_health_check(&mut peta, "Cracked beak", 8, "Soft food and rest")?
    );
    expect_refusal(
        "Sam examines Peta",
        sam.perform_health_check(&mut peta, "Ruffled feathers", 2, ""),
    );
    expect_refusal(
        "Dr. Lee records severity 12",
        lee.perform_health_check(&mut peta, "Off the chart", 12, ""),
    );
    println!("{}", sam.feed_animal(&peta, "seeds")?);

    let peta = match aviary.add_animal(peta) {
        Ok(()) => None,
        Err(rejected) => {
            println!("Peta into the aviary: refused - {}", rejected);
            Some(rejected.into_animal())
        }
    };
    if let Some(mut peta) = peta {
        println!(
            "{} has {} health record(s):",
            peta.name(),
            peta.health_record_count()
        );
        for record in peta.health_records() {
            println!("  {}", record);
        }
        peta.clear_treatment();
        println!("{} has recovered.", peta.name());
        aviary.add_animal(peta)?;
    }
    println!("{}", aviary.report_status());

    section("Removals");
    let removed = plains.remove_animal("Zara")?;
    println!("Removed {} from {}.", removed.name(), plains.name());
    expect_refusal("Remove 'Elie'", plains.remove_animal("Elie"));

    section("Status (JSON)");
    for enclosure in [&plains, &lagoon, &canopy, &aviary] {
        println!("{}", enclosure.status().to_json()?);
    }

    Ok(())
}
