use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal address owned by a single client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub zip_code: u32,
    pub city: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        zip_code: u32,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            zip_code,
            city: city.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            self.street, self.zip_code, self.city, self.country
        )
    }
}

/// Identity shared by every user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Catalog administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub profile: Profile,
}

impl Manager {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            profile: Profile {
                id,
                name: name.into(),
                email: email.into(),
            },
        }
    }
}

/// Buyer with an address book. Always holds at least one phone and one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub profile: Profile,
    phones: Vec<String>,
    addresses: Vec<Address>,
}

impl Client {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            profile: Profile {
                id,
                name: name.into(),
                email: email.into(),
            },
            phones: vec![phone.into()],
            addresses: vec![address],
        }
    }

    pub fn add_phone(&mut self, phone: impl Into<String>) {
        self.phones.push(phone.into());
    }

    pub fn add_address(
        &mut self,
        street: impl Into<String>,
        zip_code: u32,
        city: impl Into<String>,
        country: impl Into<String>,
    ) {
        self.addresses
            .push(Address::new(street, zip_code, city, country));
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Address for a 1-based menu option
    pub fn address(&self, option: usize) -> Option<&Address> {
        self.addresses.get(option.checked_sub(1)?)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.profile.name)?;
        writeln!(f, "Email: {}", self.profile.email)?;
        write!(f, "Phones: {}", self.phones.join(" --- "))
    }
}

/// Session role, resolved once when the user logs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Client,
}

impl Role {
    /// Add and remove catalog videogames
    pub const fn can_manage_catalog(&self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Build, buy and ship machines
    pub const fn can_purchase(&self) -> bool {
        matches!(self, Self::Client)
    }
}

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum User {
    Manager(Manager),
    Client(Client),
}

impl User {
    pub const fn role(&self) -> Role {
        match self {
            Self::Manager(_) => Role::Manager,
            Self::Client(_) => Role::Client,
        }
    }

    pub const fn profile(&self) -> &Profile {
        match self {
            Self::Manager(manager) => &manager.profile,
            Self::Client(client) => &client.profile,
        }
    }

    pub const fn id(&self) -> u32 {
        self.profile().id
    }

    pub fn name(&self) -> &str {
        &self.profile().name
    }

    pub const fn as_client(&self) -> Option<&Client> {
        match self {
            Self::Client(client) => Some(client),
            Self::Manager(_) => None,
        }
    }

    pub const fn as_client_mut(&mut self) -> Option<&mut Client> {
        match self {
            Self::Client(client) => Some(client),
            Self::Manager(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(
            12,
            "Ana Maria",
            "ana@example.com",
            "+573001234567",
            Address::new("Calle 1 - 23", 110_111, "Bogota", "Colombia"),
        )
    }

    #[test]
    fn test_role_capabilities() {
        assert!(Role::Manager.can_manage_catalog());
        assert!(!Role::Manager.can_purchase());
        assert!(Role::Client.can_purchase());
        assert!(!Role::Client.can_manage_catalog());
    }

    #[test]
    fn test_user_role_and_identity() {
        let user = User::Client(client());
        assert_eq!(user.role(), Role::Client);
        assert_eq!(user.id(), 12);
        assert_eq!(user.name(), "Ana Maria");

        let user = User::Manager(Manager::new(1, "Boss", "boss@example.com"));
        assert_eq!(user.role(), Role::Manager);
    }

    #[test]
    fn test_add_address_appends() {
        let mut client = client();
        client.add_address("Av 5", 500_001, "Medellin", "Colombia");
        assert_eq!(client.addresses().len(), 2);
        assert_eq!(client.address(2).map(|a| a.city.as_str()), Some("Medellin"));
        assert!(client.address(0).is_none());
        assert!(client.address(3).is_none());
    }

    #[test]
    fn test_display_joins_phones() {
        let mut client = client();
        client.add_phone("555-1234");
        assert!(client.to_string().ends_with("Phones: +573001234567 --- 555-1234"));
    }
}
