mod accuracy;
mod damage_class;
mod learn_method;
mod move_data;
mod power;

pub use accuracy::Accuracy;
pub use damage_class::DamageClass;
pub use learn_method::LearnMethod;
pub use move_data::Move;
pub use power::Power;
