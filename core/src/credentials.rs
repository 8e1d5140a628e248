use std::io;

use secrecy::SecretString;

/// Supplies the credential piped to the privilege-escalation call.
///
/// Asked at most once per firewall query. `Ok(None)` runs the query without input,
/// e.g. when the process already has the required privileges.
pub trait CredentialSource: Send + Sync {
    fn credential(&self) -> io::Result<Option<SecretString>>;
}

/// Never provides a credential.
pub struct NoCredential;

impl CredentialSource for NoCredential {
    fn credential(&self) -> io::Result<Option<SecretString>> {
        Ok(None)
    }
}
