/// The UPnP services exposed by WeMo devices that this crate speaks to
///
/// WeMo switches expose their on/off control through the vendor-defined
/// `basicevent` service at a fixed control path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// BasicEvent service - binary state query and control
    BasicEvent,
}

/// Contains the endpoint and service URI information for a UPnP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// The HTTP endpoint path for this service (relative to device base URL)
    pub endpoint: &'static str,

    /// The UPnP service URI used in SOAP requests
    pub service_uri: &'static str,
}

impl Service {
    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            Service::BasicEvent => "BasicEvent",
        }
    }

    /// Get the service information (endpoint and URI) for this service
    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::BasicEvent => ServiceInfo {
                endpoint: "upnp/control/basicevent1",
                service_uri: "urn:Belkin:service:basicevent:1",
            },
        }
    }
}
