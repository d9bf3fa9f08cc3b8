use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use procurehub_core::{DomainError, DomainResult, Entity, RequestId};

/// Lifecycle status of a stored procurement request.
///
/// No transition graph is enforced: any status may be set from any other,
/// including reopening a closed request. Intentional; see the repository
/// tests documenting the behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Open,
    InProgress,
    Closed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Open => "open",
            RequestStatus::InProgress => "in-progress",
            RequestStatus::Closed => "closed",
        }
    }
}

impl core::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(RequestStatus::Open),
            "in-progress" => Ok(RequestStatus::InProgress),
            "closed" => Ok(RequestStatus::Closed),
            other => Err(DomainError::validation(format!(
                "status must be one of: open, in-progress, closed (got '{other}')"
            ))),
        }
    }
}

/// A single order line in a procurement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Description of the item/service.
    pub position_description: String,
    /// Price per unit/item/service.
    pub unit_price: f64,
    /// The quantity or number of units being ordered.
    pub amount: u32,
    /// The unit of measure (e.g. licenses, pieces, hours).
    pub unit: String,
    /// Total price for this line. No consistency with `unit_price * amount`
    /// is enforced here; that is the caller's responsibility.
    pub total_price: f64,
}

impl OrderLine {
    pub fn validate(&self) -> DomainResult<()> {
        if self.position_description.is_empty() {
            return Err(DomainError::validation(
                "position_description must not be empty",
            ));
        }
        // Written in the positive form so NaN fails too.
        if !(self.unit_price > 0.0) {
            return Err(DomainError::validation("unit_price must be positive"));
        }
        if self.amount == 0 {
            return Err(DomainError::validation("amount must be positive"));
        }
        if self.unit.is_empty() {
            return Err(DomainError::validation("unit must not be empty"));
        }
        if !(self.total_price > 0.0) {
            return Err(DomainError::validation("total_price must be positive"));
        }
        Ok(())
    }
}

/// An inbound procurement request submission, not yet validated against the
/// commodity-group catalog. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementRequestCreate {
    /// Full name of the person submitting the request.
    pub requestor_name: String,
    /// Brief name or description of the product/service requested.
    pub title: String,
    /// Name of the company or individual providing the items/services.
    pub vendor_name: String,
    /// VAT identification number of the vendor.
    pub vat_id: String,
    /// The commodity-group name, matched against the catalog on intake.
    pub commodity_group: String,
    /// Order line items; at least one is required.
    pub order_lines: Vec<OrderLine>,
    /// Estimated total cost of the request.
    pub total_cost: f64,
    /// The department of the requestor.
    pub department: String,
}

impl ProcurementRequestCreate {
    /// Field-level validation of the submission.
    ///
    /// Catalog membership of `commodity_group` is checked separately by the
    /// intake service; this only covers the shape constraints.
    pub fn validate(&self) -> DomainResult<()> {
        if self.requestor_name.is_empty() {
            return Err(DomainError::validation("requestor_name must not be empty"));
        }
        if self.title.is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        if self.vendor_name.is_empty() {
            return Err(DomainError::validation("vendor_name must not be empty"));
        }
        if self.vat_id.is_empty() {
            return Err(DomainError::validation("vat_id must not be empty"));
        }
        if self.commodity_group.is_empty() {
            return Err(DomainError::validation("commodity_group must not be empty"));
        }
        if self.order_lines.is_empty() {
            return Err(DomainError::validation(
                "order_lines must contain at least one line",
            ));
        }
        for line in &self.order_lines {
            line.validate()?;
        }
        if !(self.total_cost > 0.0) {
            return Err(DomainError::validation("total_cost must be positive"));
        }
        if self.department.is_empty() {
            return Err(DomainError::validation("department must not be empty"));
        }
        Ok(())
    }
}

/// A procurement request accepted into storage, wrapped with server-assigned
/// metadata. Only the repository assigns ids/timestamps or mutates status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementRequestStored {
    pub id: RequestId,
    pub created_at: DateTime<Utc>,
    pub status: RequestStatus,
    pub request: ProcurementRequestCreate,
}

impl ProcurementRequestStored {
    /// Wrap an accepted submission with fresh metadata: new id, current
    /// time, initial `open` status.
    pub fn new(request: ProcurementRequestCreate) -> Self {
        Self {
            id: RequestId::new(),
            created_at: Utc::now(),
            status: RequestStatus::Open,
            request,
        }
    }
}

impl Entity for ProcurementRequestStored {
    type Id = RequestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
