use anyhow::{Context, Result};
use swapi_search::{CharacterSource, SearchQuery};

use super::format;

pub async fn run(source: &dyn CharacterSource, query: &str, json: bool) -> Result<()> {
    let query = SearchQuery::new(query);
    let results = source
        .search(query.as_str())
        .await
        .with_context(|| format!("search for \"{query}\" failed"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No characters found for \"{query}\".");
    } else {
        print!("{}", format::character_table(&results));
    }

    Ok(())
}
