//! JSON shape consumed by the presentation layer.

use atlas_core::{PipelineOptions, build_dashboard_from_text};
use atlas_lookup::CountryTable;

#[test]
fn dashboard_json_snapshot() {
    let text = "Title,Wallet,Region\nAlice,9Wj,India\nBob,7Gx,Atlantis\nCara,3Kp,India\n";
    let table = CountryTable::embedded().expect("embedded table");
    let stats = build_dashboard_from_text(text, &PipelineOptions::default(), &table);
    let json = serde_json::to_string_pretty(&stats).expect("serialize stats");
    insta::assert_snapshot!(json);
}
