use mlboard_core::containers::{
    BuildsContainer, ContainerError, ExperimentsContainer, ListScope,
};
use mlboard_core::selectors::select_last_fetched;
use mlboard_entity::EntityKind;
use mlboard_store::{ingest_list, AppState, AuthState};
use mlboard_test_utils::{build_payload, experiment_payload_with_job, list_body, unique_name};
use pretty_assertions::assert_eq;

#[test]
fn fetched_page_flows_into_view_props() {
    let state = ingest_list(
        AppState::new(AuthState::signed_in("alice")),
        EntityKind::Build,
        list_body(
            vec![
                build_payload("alice", "proj1", 1),
                build_payload("alice", "proj1", 2),
            ],
            5,
        ),
    )
    .unwrap();

    let container = BuildsContainer::new(
        ListScope::for_user("alice").in_project(unique_name("alice.proj1")),
    );
    let props = container.props(&state);

    assert_eq!(props.count, 5);
    assert!(props.is_current_user);
    let names: Vec<_> = props
        .items
        .iter()
        .map(|item| item.as_ref().unwrap().unique_name.as_str().to_string())
        .collect();
    assert_eq!(names, vec!["alice.proj1.builds.1", "alice.proj1.builds.2"]);
}

#[test]
fn embedded_jobs_surface_through_their_own_table() {
    let state = ingest_list(
        AppState::default(),
        EntityKind::Experiment,
        list_body(vec![experiment_payload_with_job("alice", "proj1", 4, 7)], 1),
    )
    .unwrap();

    // The experiment list view sees the experiment; the job landed in the
    // experiment-job table with a back-reference on its parent.
    let (experiments, _) = select_last_fetched(&state.experiments);
    assert_eq!(experiments.len(), 1);
    let experiment = experiments[0].as_ref().unwrap();
    assert_eq!(experiment.jobs, vec![unique_name("alice.proj1.4.7")]);
    assert!(state
        .experiment_jobs
        .get(&unique_name("alice.proj1.4.7"))
        .is_some());
}

#[test]
fn unscoped_container_is_a_configuration_error() {
    let container = ExperimentsContainer::new(ListScope::for_user("alice"));
    let result = container.fetch_data(None, None, None, None);
    assert!(matches!(result, Err(ContainerError::MissingScope)));

    // An anonymous bookmarks view still resolves; only the total absence
    // of scope fails.
    let container = ExperimentsContainer::new(ListScope::for_user("alice").with_bookmarks());
    assert!(container.fetch_data(None, None, None, None).is_ok());
}

#[test]
fn second_fetch_replaces_the_list_view() {
    let state = ingest_list(
        AppState::default(),
        EntityKind::Build,
        list_body(vec![build_payload("alice", "proj1", 1)], 1),
    )
    .unwrap();
    let state = ingest_list(
        state,
        EntityKind::Build,
        list_body(vec![build_payload("alice", "proj1", 2)], 1),
    )
    .unwrap();

    let (items, _) = select_last_fetched(&state.builds);
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].as_ref().unwrap().unique_name,
        unique_name("alice.proj1.builds.2")
    );
    // The first build is still in the accumulated table.
    assert!(state.builds.get(&unique_name("alice.proj1.builds.1")).is_some());
}
