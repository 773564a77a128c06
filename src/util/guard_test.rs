use super::*;

#[test]
fn login_redirect_target_carries_attempted_path() {
    assert_eq!(
        login_redirect_target("/dashboard"),
        "/login?next=%2Fdashboard"
    );
}

#[test]
fn login_redirect_target_encodes_nested_paths() {
    assert_eq!(
        login_redirect_target("/boards/42/edit"),
        "/login?next=%2Fboards%2F42%2Fedit"
    );
}

#[test]
fn login_redirect_target_omits_next_for_root() {
    assert_eq!(login_redirect_target("/"), "/login");
    assert_eq!(login_redirect_target(""), "/login");
}
