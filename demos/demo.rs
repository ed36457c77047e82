//! End-to-end demo of combo generation.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=trick_combo_gen=debug` to see the engine's tracing output.
//!
//! 1. **Strategy comparison** — the same seed is run through the weighted and
//!    the flow sampler so you can see how stance matching changes the order.
//! 2. **Filters** — a difficulty ceiling and a category exclusion narrow the
//!    pool before sampling.
//! 3. **Errors** — an oversized request and a too-small pool show the two
//!    error kinds a boundary layer has to translate.

use trick_combo_gen::{
    generate_combo, ComboConfig, ComboFilters, ComboRequest, GeneratedCombo, SamplingStrategy,
    TrickCatalog,
};

const CATALOG: &str = r#"[
    { "id": 1,  "name": "Backflip",       "weight": 8, "difficulty": 2, "category_id": 1,
      "takeoff_stance": 1, "landing_stance": 1 },
    { "id": 2,  "name": "Gainer",         "weight": 6, "difficulty": 3, "category_id": 1,
      "takeoff_stance": 1, "landing_stance": 1 },
    { "id": 3,  "name": "Webster",        "weight": 5, "difficulty": 3, "category_id": 1,
      "takeoff_stance": 2, "landing_stance": 1 },
    { "id": 4,  "name": "Butterfly Kick", "weight": 7, "difficulty": 2, "category_id": 2,
      "takeoff_stance": 3, "landing_stance": 3 },
    { "id": 5,  "name": "540 Kick",       "weight": 4, "difficulty": 4, "category_id": 3,
      "takeoff_stance": 3, "landing_stance": 2 },
    { "id": 6,  "name": "Cork",           "weight": 2, "difficulty": 6, "category_id": 2,
      "takeoff_stance": 3, "landing_stance": 3 },
    { "id": 7,  "name": "Aerial",         "weight": 5, "difficulty": 3, "category_id": 2,
      "landing_stance": 3 },
    { "id": 8,  "name": "Scoot",          "weight": 3, "difficulty": 1 },
    { "id": 9,  "name": "Raiz",           "weight": 4, "difficulty": 3, "category_id": 2,
      "takeoff_stance": 3, "landing_stance": 2 },
    { "id": 10, "name": "Double Leg",     "weight": 1, "difficulty": 7, "category_id": 2,
      "takeoff_stance": 3, "landing_stance": 3 }
]"#;

fn print_combo(label: &str, combo: &GeneratedCombo) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{label}]  total difficulty: {}", combo.total_difficulty);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", combo.notation);
    for (i, t) in combo.tricks.iter().enumerate() {
        println!("    {}. {} (#{})", i + 1, t.name, t.id);
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = match TrickCatalog::from_json_str(CATALOG) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("bad catalog: {e}");
            return;
        }
    };
    let config = ComboConfig::load().unwrap_or_else(|e| {
        eprintln!("config error ({e}), using defaults");
        ComboConfig::default()
    });

    println!(
        "Catalog: {} tricks, sizes {}..={}\n",
        catalog.len(),
        config.min_size,
        config.max_size
    );

    // ── 1. strategy comparison ──
    for strategy in [SamplingStrategy::Weighted, SamplingStrategy::Flow] {
        let request = ComboRequest::new(5).with_seed(2024).with_strategy(strategy);
        match generate_combo(&catalog, &request, &config) {
            Ok(combo) => print_combo(&format!("{strategy}, seed 2024"), &combo),
            Err(e) => eprintln!("{strategy}: {e}"),
        }
    }

    // ── 2. filters ──
    let filters = ComboFilters {
        max_difficulty: Some(4),
        exclude_category_ids: vec![1],
        ..Default::default()
    };
    let request = ComboRequest::new(4)
        .with_seed(7)
        .with_strategy(SamplingStrategy::Flow)
        .with_filters(filters);
    match generate_combo(&catalog, &request, &config) {
        Ok(combo) => print_combo("flow, difficulty <= 4, no flips", &combo),
        Err(e) => eprintln!("filtered: {e}"),
    }

    // ── 3. errors ──
    let too_big = ComboRequest::new(config.max_size as i64 + 1);
    if let Err(e) = generate_combo(&catalog, &too_big, &config) {
        println!("  size {} → {e}", too_big.size);
    }
    let unsatisfiable = ComboRequest::new(3).with_filters(ComboFilters {
        trick_ids: vec![1, 2],
        ..Default::default()
    });
    if let Err(e) = generate_combo(&catalog, &unsatisfiable, &config) {
        println!("  two-trick pool, size 3 → {e}");
    }
}
