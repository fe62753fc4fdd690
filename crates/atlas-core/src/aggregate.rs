use std::collections::HashMap;

use atlas_lookup::CountryTable;
use atlas_model::{Builder, CountryStats};

/// Group builders by their exact `region` string.
///
/// Groups keep first-seen order and members keep input order until the final
/// sort, which orders by `builder_count` descending. The sort is stable, so
/// equal counts stay in first-seen order.
pub fn aggregate_by_country(builders: &[Builder], table: &CountryTable) -> Vec<CountryStats> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<Builder>)> = Vec::new();
    for builder in builders {
        let region = builder.region.as_str();
        let slot = *slots.entry(region).or_insert_with(|| {
            groups.push((region, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(builder.clone());
    }

    let mut countries: Vec<CountryStats> = groups
        .into_iter()
        .map(|(country, members)| CountryStats {
            country: country.to_string(),
            country_code: table.country_code(country).to_string(),
            builder_count: members.len(),
            total_score: members.iter().map(|b| b.score).sum(),
            top_builder: members.first().cloned(),
            coordinates: table.coordinates(country),
            builders: members,
        })
        .collect();
    countries.sort_by(|a, b| b.builder_count.cmp(&a.builder_count));
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CountryTable {
        CountryTable::embedded().unwrap()
    }

    #[test]
    fn groups_by_exact_region_string() {
        let builders = vec![
            Builder::new("A", "1", "USA"),
            Builder::new("B", "2", "United States"),
            Builder::new("C", "3", "usa"),
        ];
        let countries = aggregate_by_country(&builders, &table());
        assert_eq!(countries.len(), 3);
        assert!(countries.iter().all(|c| c.builder_count == 1));
        assert_eq!(countries[1].country_code, "US");
        assert_eq!(countries[0].country_code, "XX");
    }

    #[test]
    fn top_builder_is_first_seen_not_highest_score() {
        let builders = vec![
            Builder::new("Low", "1", "India").with_score(1.0),
            Builder::new("High", "2", "India").with_score(500.0),
        ];
        let countries = aggregate_by_country(&builders, &table());
        let top = countries[0].top_builder.as_ref().unwrap();
        assert_eq!(top.title, "Low");
        assert_eq!(countries[0].total_score, 501.0);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(aggregate_by_country(&[], &table()).is_empty());
    }
}
