use strata_client::UpsertAction;
use strata_types::Sys;

// The dispatch decision is a pure function of the metadata block and is
// exercised here without any network.

#[test]
fn no_sys_plans_a_create() {
    assert_eq!(UpsertAction::plan(None), UpsertAction::Create);
}

#[test]
fn empty_id_plans_a_create() {
    let sys = Sys {
        version: Some(3),
        ..Default::default()
    };
    assert_eq!(UpsertAction::plan(Some(&sys)), UpsertAction::Create);
}

#[test]
fn non_empty_id_plans_an_update_with_version() {
    let sys = Sys {
        id: "3HNzx9gvJScKku4UmcekYw".to_string(),
        version: Some(7),
        ..Default::default()
    };
    assert_eq!(
        UpsertAction::plan(Some(&sys)),
        UpsertAction::Update {
            id: "3HNzx9gvJScKku4UmcekYw".to_string(),
            version: 7
        }
    );
}

#[test]
fn missing_version_defaults_to_zero() {
    let sys = Sys {
        id: "abc".to_string(),
        ..Default::default()
    };
    assert_eq!(
        UpsertAction::plan(Some(&sys)),
        UpsertAction::Update {
            id: "abc".to_string(),
            version: 0
        }
    );
}
