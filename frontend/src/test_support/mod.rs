#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::Role;
    use crate::state::session::Session;
    use leptos::*;

    pub fn admin_session() -> Session {
        Session {
            id: "u-admin".into(),
            name: "Admin Simplon".into(),
            email: "admin@simplon.co".into(),
            role: Role::Admin,
            token: "jeton-admin".into(),
        }
    }

    pub fn student_session() -> Session {
        Session {
            id: "u-etudiant".into(),
            name: "Aissatou Bah".into(),
            email: "aissatou@simplon.co".into(),
            role: Role::Student,
            token: "jeton-etudiant".into(),
        }
    }

    pub fn provide_session(
        session: Option<Session>,
    ) -> (
        ReadSignal<Option<Session>>,
        WriteSignal<Option<Session>>,
    ) {
        let (read, write) = create_signal(session);
        provide_context((read, write));
        (read, write)
    }
}
