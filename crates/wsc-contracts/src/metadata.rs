//! Contract and chaincode metadata
//!
//! Descriptive information published alongside the operations: titles,
//! versions, license, and contact. Serialized into the chaincode
//! metadata document for tooling.

use serde::{Deserialize, Serialize};

/// Metadata describing one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    /// Human-readable contract title
    pub title: String,
    /// Longer description of what the contract manages
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Contract version
    pub version: String,
    /// License the contract is published under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseInfo>,
    /// Who to reach about the contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl ContractInfo {
    /// Create metadata with a title and version
    pub fn new<T: Into<String>, V: Into<String>>(title: T, version: V) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            version: version.into(),
            license: None,
            contact: None,
        }
    }

    /// Set the description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Set the license
    pub fn with_license(mut self, license: LicenseInfo) -> Self {
        self.license = Some(license);
        self
    }

    /// Set the contact
    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = Some(contact);
        self
    }
}

/// License entry in contract metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// SPDX-style license name
    pub name: String,
    /// Where the license text lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl LicenseInfo {
    /// Create a license entry by name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Set the license URL
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Contact entry in contract metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact name
    pub name: String,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ContactInfo {
    /// Create a contact entry by name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            email: None,
            url: None,
        }
    }

    /// Set the contact email
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the contact URL
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Metadata describing the deployed bundle as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeInfo {
    /// Bundle title
    pub title: String,
    /// Bundle version
    pub version: String,
}

impl ChaincodeInfo {
    /// Create bundle metadata with a title and version
    pub fn new<T: Into<String>, V: Into<String>>(title: T, version: V) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
        }
    }
}

impl Default for ChaincodeInfo {
    fn default() -> Self {
        Self::new("wsc chaincode", "0.0.1")
    }
}
