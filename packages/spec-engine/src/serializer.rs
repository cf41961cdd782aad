use crate::types::segment::Segment;

/// Separator between segments in a spec string.
pub const SEGMENT_SEPARATOR: &str = "/";

/// Join segments into the final spec string. An empty list yields `""`.
pub fn serialize(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::to_string)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}
