pub mod candidate;
pub mod language;
pub mod locale;
pub mod member;
pub mod survey;

pub use candidate::{BattleRecord, CandidateMember};
pub use language::{JpSupportLevel, KoreanLevel};
pub use locale::{Locale, LocalizedText};
pub use member::{Group, Member};
pub use survey::{Question, QuestionKind, QuestionOption, SurveyScores};
