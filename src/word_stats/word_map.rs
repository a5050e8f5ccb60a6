use indexmap::IndexMap;

pub type Count = u32;
pub type Score = f64;

/// Word maps remember the order words were first inserted. Iteration,
/// serialization and every tie-break in the calculator follow that order;
/// equality ignores it.
pub type WordMap<V> = IndexMap<String, V>;

pub type WordCounts = WordMap<Count>;
pub type IdfScores = WordMap<Score>;
pub type TfIdfScores = WordMap<Score>;
