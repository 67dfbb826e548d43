mod error_assert;
mod fake_source;
mod fixtures;
mod setup;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use fake_source::FakeRecordSource;
pub use fixtures::{
    TestDataDir,
    bulbasaur,
    charmander,
    ivysaur,
    species,
    standard_moves,
    standard_pokemon,
    standard_store,
    tackle,
    venusaur,
    vine_whip,
};
pub use setup::setup_test_environment;
