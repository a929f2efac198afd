//! Settings schema definitions.
//!
//! This module defines the complete settings structure handed to the
//! CMS runtime. Connection fields come from the environment descriptor
//! verbatim; everything else is a literal default defined here.

use std::fmt;
use std::path::PathBuf;

use crate::config::env::EnvDescriptor;

/// Default database character set for new tables.
pub const DEFAULT_CHARSET: &str = "utf8";

/// Default database collation; empty selects the charset default.
pub const DEFAULT_COLLATE: &str = "";

/// Default table name prefix.
///
/// Multiple installations can share one database if each uses a unique
/// prefix. Only letters, digits and underscores are legal.
pub const DEFAULT_TABLE_PREFIX: &str = "cms_";

/// Root settings for a CMS installation.
///
/// Immutable once assembled; published at most once per process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Database connection settings.
    pub database: DatabaseSettings,

    /// Authentication keys and salts.
    pub auth: AuthKeys,

    /// Table name prefix for this installation.
    pub table_prefix: String,

    /// Debugging flags.
    pub debug: DebugFlags,

    /// Absolute path to the installation directory.
    pub base_path: PathBuf,
}

/// Database connection settings.
#[derive(Clone)]
pub struct DatabaseSettings {
    /// Name of the database for this installation.
    pub name: String,

    /// Database username.
    pub user: String,

    /// Database password.
    pub password: String,

    /// Database hostname.
    pub host: String,

    /// Character set used when creating tables.
    pub charset: String,

    /// Collate type. Leave empty if in doubt.
    pub collate: String,
}

/// Authentication unique keys and salts.
///
/// Changing any value invalidates all existing sessions downstream,
/// forcing every user to log in again.
#[derive(Clone)]
pub struct AuthKeys {
    pub auth_key: String,
    pub secure_auth_key: String,
    pub logged_in_key: String,
    pub nonce_key: String,
    pub auth_salt: String,
    pub secure_auth_salt: String,
    pub logged_in_salt: String,
    pub nonce_salt: String,
}

impl Default for AuthKeys {
    fn default() -> Self {
        Self {
            auth_key: "q7W(x2#mB=Jc;r!R8tZ0a%S_n?{VgKu<9f+F4i}L.yD6|kE~$3h@N]p[P-&TwMo".to_string(),
            secure_auth_key: "z&1G^tH)8s:V=c+Oa7jX!mQ4d*W[l9}K{M;2r%Y<F_uI?5N~k.T$E-p(n#b|Jv0".to_string(),
            logged_in_key: "L0o@x&3D}f9S(j!qC8;k#w2+aU=Z%G]M7yB<r^R{V~T-4mEh?$1_.nP)5g:z*I6".to_string(),
            nonce_key: "e8K!w;W2m{R=#G_s)u+0xT%(L9<dA?q&]J1o~B.h:6Y^*z-N@Q7$f4|3C5aMvX5".to_string(),
            auth_salt: "8c%S{F7)b!H^h0x:o@+2W$=m;L]&1tV*9B-G?.K_3p<yQ(Z|R~N#j6I4faEq}5D".to_string(),
            secure_auth_salt: "k9T~v2*H%e&f1m$o.p=x(8A-G3;!Bq]V@J{j:z5W7#w)K6X?N+iDQ4n<S^}8tYu".to_string(),
            logged_in_salt: "dU4;j8z+L(r@o2vE^K}F!5pA=q%n&C*.x0m<W-#T6Q1N{h|9B:$e_]3Y)G~S7kR".to_string(),
            nonce_salt: "wV5^9j@G{y3m}r~s:F!I+0oH#p.=)(aZ<%7-J;8bn3KE|2&C*k]B6_$qMzXa4uW".to_string(),
        }
    }
}

impl AuthKeys {
    /// Field name and value pairs, in definition order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("auth.auth_key", self.auth_key.as_str()),
            ("auth.secure_auth_key", self.secure_auth_key.as_str()),
            ("auth.logged_in_key", self.logged_in_key.as_str()),
            ("auth.nonce_key", self.nonce_key.as_str()),
            ("auth.auth_salt", self.auth_salt.as_str()),
            ("auth.secure_auth_salt", self.secure_auth_salt.as_str()),
            ("auth.logged_in_salt", self.logged_in_salt.as_str()),
            ("auth.nonce_salt", self.nonce_salt.as_str()),
        ]
    }
}

/// Debugging flags for this installation.
///
/// Always enabled in the local development configuration, never
/// derived from the environment descriptor.
#[derive(Debug, Clone, Copy)]
pub struct DebugFlags {
    /// Display of runtime notices.
    pub runtime: bool,

    /// Serve unminified scripts.
    pub scripts: bool,
}

impl Default for DebugFlags {
    fn default() -> Self {
        Self {
            runtime: true,
            scripts: true,
        }
    }
}

impl Settings {
    /// Assemble settings from a parsed environment descriptor.
    ///
    /// Connection fields are taken verbatim, with no trimming or other
    /// transformation; everything else comes from the literal defaults.
    pub fn from_descriptor(descriptor: &EnvDescriptor, base_path: PathBuf) -> Self {
        Self {
            database: DatabaseSettings {
                name: descriptor.database.creds.database.clone(),
                user: descriptor.database.creds.user.clone(),
                password: descriptor.database.creds.password.clone(),
                host: descriptor.database.internal_connection.host.clone(),
                charset: DEFAULT_CHARSET.to_string(),
                collate: DEFAULT_COLLATE.to_string(),
            },
            auth: AuthKeys::default(),
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
            debug: DebugFlags::default(),
            base_path,
        }
    }
}

// Secrets must never reach logs; Debug output redacts them.

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("charset", &self.charset)
            .field("collate", &self.collate)
            .finish()
    }
}

impl fmt::Debug for AuthKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKeys { <redacted> }")
    }
}
