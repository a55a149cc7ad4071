use super::{Record, RecordData};
use std::net::IpAddr;
use std::sync::Arc;

/// Successful resolution payload: the three record sections of a DNS response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
}

/// What an [`Answer`] says about the address of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressLookup {
    Found(IpAddr),
    /// The name is an alias whose `target` has no address in this answer,
    /// reached after following `hops` aliases.
    Alias { target: Arc<str>, hops: usize },
    /// Reaching an address would take more aliases than allowed.
    TooManyAliases,
    Missing,
}

impl Answer {
    pub fn new(answers: Vec<Record>) -> Self {
        Self {
            answers,
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authority.is_empty() && self.additional.is_empty()
    }

    /// Every record across the answer, authority and additional sections, in that order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }

    /// Find an address for `name`, following at most `max_hops` CNAME aliases
    /// held in this answer.
    pub fn address_for(&self, name: &str, max_hops: usize) -> AddressLookup {
        let mut current: Arc<str> = Arc::from(name);
        let mut hops = 0;

        loop {
            if let Some(ip) = self
                .records()
                .filter(|r| r.is_named(&current))
                .find_map(|r| r.data.ip_addr())
            {
                return AddressLookup::Found(ip);
            }

            let target = self
                .records()
                .filter(|r| r.is_named(&current))
                .find_map(|r| match &r.data {
                    RecordData::CNAME(target) => Some(Arc::clone(target)),
                    _ => None,
                });

            match target {
                None if hops == 0 => return AddressLookup::Missing,
                None => {
                    return AddressLookup::Alias {
                        target: current,
                        hops,
                    }
                }
                Some(_) if hops == max_hops => return AddressLookup::TooManyAliases,
                Some(target) => {
                    hops += 1;
                    current = target;
                }
            }
        }
    }
}
