use crate::{Error, IdfTable, Result, UnitSet};
use std::collections::{HashMap, HashSet};

/// Compute `ln(N / df)` for every token that occurs in at least one unit.
///
/// `df` counts units containing the token, not occurrences. Units may be whole
/// documents or single sentences; the calculation does not care which.
pub fn compute_idfs(units: &UnitSet) -> Result<IdfTable> {
    if units.is_empty() {
        return Err(Error::EmptyUnitSet);
    }
    let n = units.len() as f64;

    let mut df: HashMap<&str, u32> = HashMap::new();
    for (_, tokens) in units.iter() {
        let seen_in_unit: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in seen_in_unit {
            *df.entry(token).or_insert(0) += 1;
        }
    }
    let idfs: IdfTable = df
        .into_iter()
        .map(|(token, df_t)| (token.to_string(), (n / df_t as f64).ln()))
        .collect();

    tracing::debug!(units = units.len(), terms = idfs.len(), "computed idf table");
    Ok(idfs)
}
