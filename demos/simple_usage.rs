/// Complete lettra API demo
///
/// Demonstrates the major engine operations:
/// - Building an engine over a small letter archive
/// - Ranked search with highlighted excerpts
/// - The result cache and engine statistics
/// - Index snapshot round-trip

use lettra::core::config::EngineConfig;
use lettra::core::types::{FieldMap, FieldValue};
use lettra::index::tfidf::VectorIndex;
use lettra::search::engine::QueryEngine;

fn letter(title: &str, year: f64, body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("Название".to_string(), FieldValue::Text(title.to_string()));
    fields.insert("Год".to_string(), FieldValue::Number(year));
    fields.insert("Текст".to_string(), FieldValue::Text(body.to_string()));
    fields
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        lettra Engine - Complete API Demo      ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Build the engine
    println!("Step 1: BUILD - Vectorizing the archive...");
    let records = vec![
        letter(
            "Письмо из Москвы",
            1870.0,
            "Красная площадь зимой прекрасна, снег лежит до самой реки",
        ),
        letter(
            "Письмо с юга",
            1871.0,
            "Синее море летом тёплое, вечера долгие и тихие",
        ),
        letter(
            "Письмо о ярмарке",
            1872.0,
            "Площадь заполнена людьми, торговля идёт с самого утра",
        ),
    ];
    let engine = QueryEngine::build(records.clone(), EngineConfig::default())?;
    println!("  Indexed {} letters\n", engine.corpus().len());

    // Step 2: Ranked search
    println!("Step 2: SEARCH - Ranking letters...");
    for result in engine.search("площадь", 5) {
        let title = result
            .fields
            .get("Название")
            .map(|v| v.as_text())
            .unwrap_or_default();
        println!("  {:.3}  {}", result.score, title);
        println!("         {}", result.excerpt);
    }
    println!();

    // Step 3: Cached repeat of the same query
    println!("Step 3: CACHE - Repeating the query...");
    engine.search("площадь", 5);
    let stats = engine.stats();
    println!(
        "  result cache: {} hits / {} misses ({:.0}% hit rate)",
        stats.result_cache.hit_count,
        stats.result_cache.miss_count,
        stats.result_cache.hit_rate() * 100.0
    );
    println!(
        "  normalization cache: {} entries\n",
        stats.normalization_cache.size
    );

    // Step 4: Snapshot round-trip
    println!("Step 4: SNAPSHOT - Round-tripping the index...");
    let bytes = engine.index().to_bytes()?;
    println!("  snapshot size: {} bytes", bytes.len());

    let restored_index = VectorIndex::from_bytes(&bytes)?;
    let restored = QueryEngine::with_index(records, EngineConfig::default(), restored_index)?;
    let results = restored.search("море", 5);
    println!(
        "  restored engine answers 'море' with {} results, best {:.3}\n",
        results.len(),
        results.first().map(|r| r.score).unwrap_or(0.0)
    );

    println!("Done!");
    Ok(())
}
