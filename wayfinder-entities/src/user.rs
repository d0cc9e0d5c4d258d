use num_derive::{FromPrimitive, ToPrimitive};

use crate::{email::EmailAddress, id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id       : Id,
    pub username : String,
    pub email    : EmailAddress,
    pub password : Password,
    pub role     : Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    Guest = 0,
    User  = 1,
    Admin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::Guest
    }
}
