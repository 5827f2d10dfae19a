pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod constants;
    pub mod scalar;

    pub mod integral {
        pub mod integral;
        pub mod integrator;
    }

    pub mod derivative {
        pub mod derivative;
        pub mod differentiator;
    }

    pub mod optimization {
        pub mod goldensectionsearch;
    }
}

pub use math::scalar::absolute;
