//! Saved payment methods.

use crate::domain::DomainError;

/// What kind of instrument a payment method is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentKind {
    Card {
        /// Card network, e.g. "visa".
        network: String,
        last4: String,
        expiry_month: u8,
        expiry_year: u16,
    },
    Upi {
        /// Wallet app, e.g. "googlepay".
        provider: String,
        upi_id: String,
    },
}

/// A saved card or UPI handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: String,
    pub kind: PaymentKind,
    pub is_default: bool,
}

impl PaymentMethod {
    pub fn card(id: &str, network: &str, last4: &str, expiry_month: u8, expiry_year: u16) -> Self {
        Self {
            id: id.to_string(),
            kind: PaymentKind::Card {
                network: network.to_string(),
                last4: last4.to_string(),
                expiry_month,
                expiry_year,
            },
            is_default: false,
        }
    }

    pub fn upi(id: &str, provider: &str, upi_id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: PaymentKind::Upi {
                provider: provider.to_string(),
                upi_id: upi_id.to_string(),
            },
            is_default: false,
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Short label, e.g. "visa •••• 4242" or "googlepay (alex@okbank)".
    pub fn label(&self) -> String {
        match &self.kind {
            PaymentKind::Card { network, last4, .. } => format!("{network} •••• {last4}"),
            PaymentKind::Upi { provider, upi_id } => format!("{provider} ({upi_id})"),
        }
    }
}

/// The user's payment methods, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethods {
    methods: Vec<PaymentMethod>,
}

impl PaymentMethods {
    pub fn new(methods: Vec<PaymentMethod>) -> Self {
        Self { methods }
    }

    pub fn as_slice(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn get(&self, id: &str) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The method flagged as default, if any.
    pub fn default_method(&self) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| m.is_default)
    }

    /// Make `id` the only default method.
    pub fn set_default(&mut self, id: &str) -> Result<(), DomainError> {
        if !self.contains(id) {
            return Err(DomainError::UnknownPaymentMethod(id.to_string()));
        }
        for method in &mut self.methods {
            method.is_default = method.id == id;
        }
        Ok(())
    }

    /// Remove a method, returning it.
    pub fn remove(&mut self, id: &str) -> Result<PaymentMethod, DomainError> {
        let pos = self
            .methods
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| DomainError::UnknownPaymentMethod(id.to_string()))?;
        Ok(self.methods.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
