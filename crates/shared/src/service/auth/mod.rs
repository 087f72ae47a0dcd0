mod login;

pub use self::login::AuthService;
