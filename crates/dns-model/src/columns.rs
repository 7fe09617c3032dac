//! Column names of the DNS capture schema.
//!
//! Canonical names follow the `tshark -T fields` field names, so a capture
//! exported with `-e frame.time_epoch -e ip.src ...` already matches.

/// Capture timestamp, seconds since the epoch.
pub const FRAME_TIME_EPOCH: &str = "frame.time_epoch";
/// Source IPv4 address.
pub const IP_SRC: &str = "ip.src";
/// Source IPv6 address.
pub const IPV6_SRC: &str = "ipv6.src";
/// 1 for a response, 0 for a query.
pub const DNS_FLAGS_RESPONSE: &str = "dns.flags.response";
pub const DNS_QRY_NAME: &str = "dns.qry.name";
pub const DNS_QRY_TYPE: &str = "dns.qry.type";
pub const DNS_RESP_NAME: &str = "dns.resp.name";
pub const DNS_RESP_TYPE: &str = "dns.resp.type";
pub const DNS_RESP_TTL: &str = "dns.resp.ttl";
pub const DNS_RESP_LEN: &str = "dns.resp.len";
/// Response code.
pub const DNS_FLAGS_RCODE: &str = "dns.flags.rcode";
pub const DNS_COUNT_ANSWERS: &str = "dns.count.answers";
pub const DNS_COUNT_ADD_RR: &str = "dns.count.add_rr";
pub const UDP_LENGTH: &str = "udp.length";
pub const FRAME_LEN: &str = "frame.len";

/// Older tshark exports name the response code `dns.rcode`.
pub const DNS_RCODE_LEGACY: &str = "dns.rcode";

/// Label columns appended after the canonical columns.
pub const CLASS: &str = "Class";
pub const SUBCLASS: &str = "Subclass";
pub const LABEL: &str = "label";

/// Canonical column order.
pub const STANDARD_COLUMNS: [&str; 15] = [
    FRAME_TIME_EPOCH,
    IP_SRC,
    IPV6_SRC,
    DNS_FLAGS_RESPONSE,
    DNS_QRY_NAME,
    DNS_QRY_TYPE,
    DNS_RESP_NAME,
    DNS_RESP_TYPE,
    DNS_RESP_TTL,
    DNS_RESP_LEN,
    DNS_FLAGS_RCODE,
    DNS_COUNT_ANSWERS,
    DNS_COUNT_ADD_RR,
    UDP_LENGTH,
    FRAME_LEN,
];

/// Columns coerced to numbers.
pub const NUMERIC_COLUMNS: [&str; 11] = [
    FRAME_TIME_EPOCH,
    DNS_QRY_TYPE,
    DNS_RESP_TYPE,
    DNS_RESP_TTL,
    DNS_RESP_LEN,
    DNS_FLAGS_RESPONSE,
    DNS_FLAGS_RCODE,
    DNS_COUNT_ANSWERS,
    DNS_COUNT_ADD_RR,
    UDP_LENGTH,
    FRAME_LEN,
];

/// Legacy column name to canonical column name.
pub const ALIASES: [(&str, &str); 9] = [
    ("timestamp", FRAME_TIME_EPOCH),
    ("status_code", DNS_FLAGS_RCODE),
    ("query_name", DNS_QRY_NAME),
    ("query_type", DNS_QRY_TYPE),
    ("response_name", DNS_RESP_NAME),
    ("response_type", DNS_RESP_TYPE),
    ("response_ttl", DNS_RESP_TTL),
    ("ip4_address", IP_SRC),
    ("ip6_address", IPV6_SRC),
];
