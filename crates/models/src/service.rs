use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A bookable workshop service as shown in the catalog.
///
/// `duration` is in minutes; `img` is a URL path into the static asset set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub img: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for creating a service; the id is assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub price: f64,
    pub img: String,
    pub duration: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update: only present fields are merged into the stored record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub img: Option<String>,
    pub duration: Option<i64>,
    pub description: Option<String>,
}

fn check_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("service name is required".into()));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ModelError::Validation("price must be a positive number".into()));
    }
    Ok(())
}

fn check_duration(duration: i64) -> Result<(), ModelError> {
    if duration <= 0 {
        return Err(ModelError::Validation("duration must be a positive number of minutes".into()));
    }
    Ok(())
}

fn check_img(img: &str) -> Result<(), ModelError> {
    if img.trim().is_empty() {
        return Err(ModelError::Validation("image URL is required".into()));
    }
    Ok(())
}

impl NewService {
    pub fn validate(&self) -> Result<(), ModelError> {
        check_name(&self.name)?;
        check_price(self.price)?;
        check_duration(self.duration)?;
        check_img(&self.img)?;
        Ok(())
    }
}

impl ServicePatch {
    /// Validate only the fields the patch actually carries.
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.name { check_name(name)?; }
        if let Some(price) = self.price { check_price(price)?; }
        if let Some(duration) = self.duration { check_duration(duration)?; }
        if let Some(img) = &self.img { check_img(img)?; }
        Ok(())
    }
}

impl Service {
    /// Merge a patch into this record, leaving absent fields untouched.
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(name) = patch.name { self.name = name; }
        if let Some(price) = patch.price { self.price = price; }
        if let Some(img) = patch.img { self.img = img; }
        if let Some(duration) = patch.duration { self.duration = duration; }
        if let Some(description) = patch.description { self.description = Some(description); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_service() -> NewService {
        NewService {
            name: "Oil change".into(),
            price: 1500.0,
            img: "/oil.png".into(),
            duration: 30,
            description: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(new_service().validate().is_ok());
    }

    #[test]
    fn rejects_blank_name_and_img() {
        let mut s = new_service();
        s.name = "   ".into();
        assert!(s.validate().is_err());

        let mut s = new_service();
        s.img = "".into();
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_price_and_duration() {
        let mut s = new_service();
        s.price = 0.0;
        assert!(s.validate().is_err());
        s.price = f64::NAN;
        assert!(s.validate().is_err());

        let mut s = new_service();
        s.duration = -10;
        assert!(s.validate().is_err());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut svc = Service {
            id: 1,
            name: "Oil change".into(),
            price: 1500.0,
            img: "/oil.png".into(),
            duration: 30,
            description: Some("Engine oil and filter".into()),
        };
        svc.apply(ServicePatch { price: Some(1800.0), ..Default::default() });
        assert_eq!(svc.price, 1800.0);
        assert_eq!(svc.name, "Oil change");
        assert_eq!(svc.duration, 30);
        assert_eq!(svc.description.as_deref(), Some("Engine oil and filter"));
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let patch = ServicePatch { name: Some("".into()), ..Default::default() };
        assert!(patch.validate().is_err());
        assert!(ServicePatch::default().validate().is_ok());
    }
}
