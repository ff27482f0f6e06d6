use std::fs;

use serde_json::json;
use tempfile::tempdir;

use cardex::catalog::Catalog;
use cardex::config::ExportConfig;
use cardex::pipeline::{ExportJob, Exporter};

#[test]
fn run_writes_one_module_per_job() {
    let temp = tempdir().unwrap();
    let raw = json!({
        "2ED": {
            "cards": [
                {
                    "name": "Lightning Bolt",
                    "type": "Instant",
                    "rarity": "Common",
                    "number": "161",
                    "multiverseid": 1234
                }
            ]
        }
    });
    let catalog = Catalog::from_json(&raw.to_string()).unwrap();

    let main_list = temp.path().join("CardsToUpload.txt");
    let other_list = temp.path().join("OtherCardsToUpload.txt");
    fs::write(&main_list, "Lightning Bolt\n").unwrap();
    fs::write(&other_list, "Storm Crow\n").unwrap();

    let config = ExportConfig::default().with_download_images(false);
    let exporter = Exporter::new(&catalog, &config);

    let jobs = [
        ExportJob {
            list: main_list,
            output: temp.path().join("Lua/Cards.lua"),
        },
        ExportJob {
            list: other_list,
            output: temp.path().join("Lua/OtherCards.lua"),
        },
    ];

    let main_summary = exporter.run(&jobs[0]).unwrap();
    let other_summary = exporter.run(&jobs[1]).unwrap();

    assert_eq!(main_summary.written, 1);
    assert_eq!(other_summary.written, 0);
    assert_eq!(other_summary.missing, 1);

    let main_module = fs::read_to_string(&jobs[0].output).unwrap();
    assert!(main_module.starts_with("local data = {\n"));
    assert!(main_module.contains("CardNumber=\"2ED161\";\n"));
    assert!(main_module.ends_with("};\nreturn data\n"));

    // A list with no hits still yields a loadable, empty module.
    let other_module = fs::read_to_string(&jobs[1].output).unwrap();
    assert_eq!(other_module, "local data = {\n\n};\nreturn data\n");
}

#[test]
fn missing_list_file_aborts_the_job() {
    let temp = tempdir().unwrap();
    let catalog = Catalog::from_json(&json!({}).to_string()).unwrap();
    let config = ExportConfig::default().with_download_images(false);
    let exporter = Exporter::new(&catalog, &config);

    let job = ExportJob {
        list: temp.path().join("nonexistent.txt"),
        output: temp.path().join("out.lua"),
    };
    assert!(exporter.run(&job).is_err());
}
