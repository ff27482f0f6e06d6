/// Short code identifying one set within the dataset.
/// Examples: `LEA`, `2ED`, `MIR`
pub type SetCode = String;
/// Card name as it appears in the dataset or an input list.
/// Examples: `Lightning Bolt`, `Æther Vial`
pub type CardName = String;
/// Collector number within a set. Not always purely numeric.
/// Examples: `161`, `74a`
pub type CollectorNumber = String;
/// Gatherer identifier used to build image URLs.
/// Example: `1234`
pub type MultiverseId = u64;
