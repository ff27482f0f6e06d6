use std::io::Cursor;

use serde_json::json;

use cardex::catalog::Catalog;
use cardex::config::ExportConfig;
use cardex::pipeline::Exporter;

fn catalog() -> Catalog {
    let raw = json!({
        "LEA": {
            "name": "Limited Edition Alpha",
            "cards": [
                {
                    "name": "Lightning Bolt",
                    "manaCost": "{R}",
                    "type": "Instant",
                    "rarity": "Common",
                    "number": "161"
                }
            ]
        },
        "2ED": {
            "name": "Unlimited Edition",
            "cards": [
                {
                    "name": "Lightning Bolt",
                    "manaCost": "{R}",
                    "cmc": 1,
                    "colors": ["Red"],
                    "type": "Instant",
                    "types": ["Instant"],
                    "rarity": "Common",
                    "text": "Lightning Bolt deals 3 damage to any target.",
                    "artist": "Christopher Rush",
                    "number": "161",
                    "multiverseid": 1234
                }
            ]
        },
        "4ED": {
            "name": "Fourth Edition",
            "cards": [
                {
                    "name": "Island",
                    "type": "Basic Land — Island",
                    "rarity": "Common",
                    "number": "368",
                    "multiverseid": 2390
                },
                {
                    "name": "Fireball",
                    "type": "Sorcery",
                    "rarity": "Common",
                    "multiverseid": 2275
                }
            ]
        }
    });
    Catalog::from_json(&raw.to_string()).unwrap()
}

fn export(catalog: &Catalog, list: &str) -> (String, cardex::ExportSummary) {
    let config = ExportConfig::default().with_download_images(false);
    let exporter = Exporter::new(catalog, &config);
    let mut out = Vec::new();
    let summary = exporter
        .process(Cursor::new(list.to_string()), &mut out)
        .unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn resolved_list_round_trips_to_the_expected_module() {
    let catalog = catalog();
    let (module, summary) = export(&catalog, "Lightning Bolt\n");

    assert_eq!(
        module,
        "local data = {\n\
         \n\
         {Name=\"Lightning Bolt\";\n\
         SetCode=\"2ED\";\n\
         Manacost=\"{{R}}\";\n\
         cmc=1;\n\
         Colors={\"Red\"};\n\
         Type=\"Instant\";\n\
         Types={\"Instant\"};\n\
         Rarity=\"Common\";\n\
         Text=[=[Lightning Bolt deals 3 damage to any target.]=];\n\
         Artist=\"Christopher Rush\";\n\
         CardNumber=\"2ED161\";\n\
         MultiverseID=1234;\n\
         };\n\
         \n\
         };\n\
         return data\n"
    );
    assert_eq!(summary.written, 1);
    assert_eq!(summary.missing, 0);
}

#[test]
fn output_order_equals_input_order() {
    let catalog = catalog();
    let (module, summary) = export(&catalog, "Island\nLightning Bolt\n");

    let island = module.find("Name=\"Island\"").unwrap();
    let bolt = module.find("Name=\"Lightning Bolt\"").unwrap();
    assert!(island < bolt);
    assert_eq!(summary.written, 2);
}

#[test]
fn misses_are_counted_and_skipped_without_aborting() {
    let catalog = catalog();
    let (module, summary) = export(&catalog, "Storm Crow\nIsland\n");

    assert!(!module.contains("Storm Crow"));
    assert!(module.contains("Name=\"Island\";\n"));
    assert_eq!(summary.missing, 1);
    assert_eq!(summary.written, 1);
}

#[test]
fn blank_lines_are_ignored() {
    let catalog = catalog();
    let (_, summary) = export(&catalog, "\n  \nIsland\n\n");
    assert_eq!(summary.written, 1);
    assert_eq!(summary.missing, 0);
}

#[test]
fn a_card_without_a_collector_number_is_reported_not_emitted() {
    let catalog = catalog();
    let (module, summary) = export(&catalog, "Fireball\nIsland\n");

    // Fireball resolves but cannot build a CardNumber; the module must
    // not contain a truncated entry for it.
    assert!(!module.contains("Fireball"));
    assert!(module.contains("Name=\"Island\";\n"));
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.written, 1);
}

#[test]
fn override_flows_into_set_code_and_card_number() {
    let catalog = catalog();
    let (module, _) = export(&catalog, "Island$MIR\n");

    assert!(module.contains("SetCode=\"MIR\";\n"));
    assert!(module.contains("CardNumber=\"MIR368\";\n"));
    // Everything else still comes from the 4ED printing.
    assert!(module.contains("MultiverseID=2390;\n"));
}

#[test]
fn empty_list_still_produces_a_well_formed_module() {
    let catalog = catalog();
    let (module, summary) = export(&catalog, "");

    assert_eq!(module, "local data = {\n\n};\nreturn data\n");
    assert_eq!(summary, cardex::ExportSummary::default());
}
