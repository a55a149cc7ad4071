use super::{RecordClass, RecordType};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Record payload, one variant per modelled record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(Arc<str>),
    NS(Arc<str>),
    PTR(Arc<str>),
    MX {
        preference: u16,
        exchange: Arc<str>,
    },
    TXT(Vec<String>),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Arc<str>,
    },
    SOA {
        mname: Arc<str>,
        rname: Arc<str>,
        serial: u32,
        minimum: u32,
    },
    HINFO {
        cpu: String,
        os: String,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::NS(_) => RecordType::NS,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::SRV { .. } => RecordType::SRV,
            RecordData::SOA { .. } => RecordType::SOA,
            RecordData::HINFO { .. } => RecordType::HINFO,
        }
    }

    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self {
            RecordData::A(v4) => Some(IpAddr::V4(*v4)),
            RecordData::AAAA(v6) => Some(IpAddr::V6(*v6)),
            _ => None,
        }
    }
}

impl From<IpAddr> for RecordData {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => RecordData::A(v4),
            IpAddr::V6(v6) => RecordData::AAAA(v6),
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(v4) => write!(f, "{}", v4),
            RecordData::AAAA(v6) => write!(f, "{}", v6),
            RecordData::CNAME(name) | RecordData::NS(name) | RecordData::PTR(name) => {
                write!(f, "{}", name)
            }
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::TXT(parts) => {
                let quoted: Vec<String> = parts.iter().map(|p| format!("{:?}", p)).collect();
                write!(f, "{}", quoted.join(" "))
            }
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
            RecordData::SOA {
                mname,
                rname,
                serial,
                minimum,
            } => write!(f, "{} {} {} {}", mname, rname, serial, minimum),
            RecordData::HINFO { cpu, os } => write!(f, "{:?} {:?}", cpu, os),
        }
    }
}

/// A resolved resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Arc<str>,
    pub class: RecordClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            class: RecordClass::IN,
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Case-insensitive owner-name comparison, ignoring a trailing root dot.
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.class,
            self.record_type(),
            self.data
        )
    }
}

pub fn same_name(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
