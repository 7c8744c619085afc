//! # Gatehouse - Username/Password Authentication Service
//!
//! Facade crate re-exporting the public APIs of the gatehouse components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `User`, `SessionClaims`
//! - **Ports**: `UserDirectory`, `CredentialHasher`, `TokenIssuer`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`
//! - **Adapters**: `PostgrestUserDirectory`, `Argon2Hasher`, `JwtTokenIssuer`, HTTP routes
//! - **Service**: `AuthService`, the router exposing `/register`, `/login`, `/health` and `/test`

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

pub use gatehouse_core::{
    CredentialsError, NewUser, Password, PasswordDigest, SessionClaims, SessionToken, User,
    UserId, Username,
};

/// Port definitions implemented by the adapters
pub mod ports {
    pub use gatehouse_core::{
        CredentialHasher, CredentialHasherError, TokenIssuer, TokenIssuerError, UserDirectory,
        UserDirectoryError,
    };
}

pub use ports::{
    CredentialHasher, CredentialHasherError, TokenIssuer, TokenIssuerError, UserDirectory,
    UserDirectoryError,
};

/// Application use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

pub use gatehouse_application::{LoginOutcome, LoginUseCase, RegisterUseCase};

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use gatehouse_adapters::http::*;
    }

    /// User directory implementations
    pub mod persistence {
        pub use gatehouse_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use gatehouse_adapters::hashing::*;
    }

    /// Session token signing and decoding
    pub mod token {
        pub use gatehouse_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

pub use gatehouse_adapters::{
    hashing::Argon2Hasher,
    persistence::{HashMapUserDirectory, PostgrestUserDirectory},
    token::{JwtConfig, JwtTokenIssuer},
};

pub use gatehouse_service::{AuthService, init_tracing};

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
