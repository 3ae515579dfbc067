//! Routes and the access check for protected views.

use std::fmt;

use snippetlog_core::SnippetId;

use crate::session::SessionState;

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    AddSnippet,
    EditSnippet(SnippetId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::AddSnippet => "/add-snippet".to_string(),
            Route::EditSnippet(id) => format!("/edit-snippet/{}", id),
        }
    }

    /// Returns true for views that need a logged-in user.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A navigation the host should perform instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    /// Replace the current history entry so going back does not return to
    /// the protected view.
    pub replace: bool,
}

/// Outcome of guarding a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    /// Session hydration has not finished yet.
    Loading,
    Render(V),
    Redirect(Redirect),
}

impl<V> Guarded<V> {
    pub fn is_render(&self) -> bool {
        matches!(self, Guarded::Render(_))
    }
}

/// Decide whether `view` may render for the given session.
///
/// Pure function of the session; holds no state.
pub fn guard<V>(session: &SessionState, view: V) -> Guarded<V> {
    if session.is_authenticated() {
        Guarded::Render(view)
    } else if session.is_loading() {
        Guarded::Loading
    } else {
        Guarded::Redirect(Redirect {
            to: Route::Login,
            replace: true,
        })
    }
}
