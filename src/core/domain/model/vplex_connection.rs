use crate::core::domain::value_object::{
    VplexHost, VplexPassword, VplexUrl, VplexUsername,
};

/// Everything needed to reach and authenticate against one VPLEX management server.
#[derive(Debug, Clone)]
pub struct VplexConnection {
    vplex_host: VplexHost,
    vplex_port: u16,
    vplex_username: VplexUsername,
    vplex_password: VplexPassword,
    vplex_secure: bool,
    accept_invalid_certs: bool,
    vplex_url: VplexUrl,
}

impl VplexConnection {
    pub fn new(
        vplex_host: VplexHost,
        vplex_port: u16,
        vplex_username: VplexUsername,
        vplex_password: VplexPassword,
        vplex_secure: bool,
        accept_invalid_certs: bool,
        vplex_url: VplexUrl,
    ) -> Self {
        Self {
            vplex_host,
            vplex_port,
            vplex_username,
            vplex_password,
            vplex_secure,
            accept_invalid_certs,
            vplex_url,
        }
    }

    pub fn vplex_host(&self) -> &VplexHost {
        &self.vplex_host
    }

    pub fn vplex_port(&self) -> u16 {
        self.vplex_port
    }

    pub fn vplex_username(&self) -> &VplexUsername {
        &self.vplex_username
    }

    pub fn vplex_password(&self) -> &VplexPassword {
        &self.vplex_password
    }

    pub fn is_connection_secure(&self) -> bool {
        self.vplex_secure
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn vplex_url(&self) -> &VplexUrl {
        &self.vplex_url
    }
}
