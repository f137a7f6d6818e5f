//! Maven coordinates and package URL parsing.

/// A Maven coordinate: `(groupId, artifactId, version)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// The archive's package URL did not match `pkg:maven/<group>/<artifact>@<version>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotMavenCoordinate;

impl MavenCoordinate {
    /// Parse a package URL of shape `pkg:maven/<group>/<artifact>@<version>`.
    ///
    /// `<group>` may itself contain `/`-separated subcomponents (the
    /// encoding Syft uses when a groupId would otherwise collide with the
    /// artifactId segment); all but the last `/`-separated segment before
    /// `@` join back together (with `.`) to form the groupId, and the last
    /// segment is the artifactId.
    pub fn parse_purl(purl: &str) -> Result<Self, NotMavenCoordinate> {
        let rest = purl.strip_prefix("pkg:maven/").ok_or(NotMavenCoordinate)?;
        let (coords, version) = rest.split_once('@').ok_or(NotMavenCoordinate)?;
        if version.is_empty() {
            return Err(NotMavenCoordinate);
        }
        // Strip any qualifiers/subpath trailing the version (`?type=jar`, `#sub/path`).
        let version = version
            .split(['?', '#'])
            .next()
            .filter(|v| !v.is_empty())
            .ok_or(NotMavenCoordinate)?;

        let parts: Vec<&str> = coords.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() < 2 {
            return Err(NotMavenCoordinate);
        }
        let (group_parts, artifact_part) = parts.split_at(parts.len() - 1);
        let group_id = group_parts.join("/").replace('/', ".");
        let artifact_id = artifact_part[0].to_string();

        Ok(Self {
            group_id,
            artifact_id,
            version: version.to_string(),
        })
    }

    /// Re-emit the package URL this coordinate would have been parsed from.
    ///
    /// Round-trips for any `group_id` that does not itself contain a `/`
    /// (the only shape `parse_purl` ever actually produces, since groupIds
    /// are dotted Java package names, not slash-separated).
    pub fn to_purl(&self) -> String {
        format!(
            "pkg:maven/{}/{}@{}",
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_coordinate() {
        let c = MavenCoordinate::parse_purl("pkg:maven/org.springframework/spring-web@6.1.0").unwrap();
        assert_eq!(c.group_id, "org.springframework");
        assert_eq!(c.artifact_id, "spring-web");
        assert_eq!(c.version, "6.1.0");
    }

    #[test]
    fn rejects_non_maven_purl() {
        assert_eq!(
            MavenCoordinate::parse_purl("pkg:npm/left-pad@1.0.0"),
            Err(NotMavenCoordinate)
        );
    }

    #[test]
    fn rejects_missing_version() {
        assert_eq!(
            MavenCoordinate::parse_purl("pkg:maven/org.example/thing"),
            Err(NotMavenCoordinate)
        );
    }

    #[test]
    fn strips_trailing_qualifiers() {
        let c = MavenCoordinate::parse_purl("pkg:maven/org.example/thing@1.0.0?type=jar").unwrap();
        assert_eq!(c.version, "1.0.0");
    }

    /// Parsing a well-formed package URL then re-emitting it yields the
    /// same triple.
    #[test]
    fn round_trips_through_purl() {
        let original = "pkg:maven/org.apache.tomcat.embed/tomcat-embed-core@10.1.15";
        let parsed = MavenCoordinate::parse_purl(original).unwrap();
        let reparsed = MavenCoordinate::parse_purl(&parsed.to_purl()).unwrap();
        assert_eq!(parsed, reparsed);
    }
}
