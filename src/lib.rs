pub mod classifier;
pub mod config;
pub mod domain {
    pub mod bank;
    pub mod classification;
    pub mod form;
}
pub mod form {
    pub mod groups;
    pub mod session;
}
pub mod http {
    pub mod handlers {
        pub mod banks;
        pub mod sessions;
    }
}
pub mod registry;
pub mod resolution {
    pub mod state;
    pub mod transitions;
}
pub mod service {
    pub mod form_service;
}
pub mod upi {
    pub mod payload;
    pub mod qr;
}

#[derive(Clone)]
pub struct AppState {
    pub form_service: service::form_service::FormService,
}
