use std::path::Path;
use std::path::PathBuf;

/// Wrap scene markup in the boilerplate Interface Builder writes around
/// every storyboard.
pub fn storyboard(scenes: &str) -> String {
	format!(
		r#"<?xml version="1.0" encoding="UTF-8"?>
<document type="com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB" version="3.0" toolsVersion="21701" targetRuntime="iOS.CocoaTouch" propertyAccessControl="none" useAutolayout="YES" useTraitCollections="YES" useSafeAreas="YES" colorMatched="YES" initialViewController="Nav-01">
    <device id="retina6_12" orientation="portrait" appearance="light"/>
    <scenes>
{scenes}
    </scenes>
</document>
"#
	)
}

/// A realistic storyboard with one of everything.
pub fn main_storyboard() -> String {
	storyboard(
		r#"        <scene sceneID="s1">
            <objects>
                <navigationController storyboardIdentifier="RootNavigation" id="Nav-01" sceneMemberID="viewController">
                    <connections>
                        <segue destination="List-01" kind="relationship" relationship="rootViewController" id="rel-1"/>
                    </connections>
                </navigationController>
            </objects>
        </scene>
        <scene sceneID="s2">
            <objects>
                <tableViewController storyboardIdentifier="ContactList" id="List-01" customClass="ContactListViewController" customModule="App" sceneMemberID="viewController">
                    <tableView key="view" id="tv-1">
                        <prototypes>
                            <tableViewCell reuseIdentifier="ContactCell" id="cell-1"/>
                            <tableViewCell reuseIdentifier="HeaderCell" id="cell-2"/>
                        </prototypes>
                    </tableView>
                    <connections>
                        <segue destination="Detail-01" kind="show" identifier="showDetail" id="seg-1"/>
                    </connections>
                </tableViewController>
            </objects>
        </scene>
        <scene sceneID="s3">
            <objects>
                <viewController storyboardIdentifier="ContactDetail" id="Detail-01" sceneMemberID="viewController">
                    <view key="view" id="v-1">
                        <subviews>
                            <collectionView id="cv-1">
                                <cells>
                                    <collectionViewCell reuseIdentifier="PhotoCell" id="cc-1"/>
                                </cells>
                            </collectionView>
                        </subviews>
                    </view>
                    <connections>
                        <segue destination="Nav-01" kind="presentation" identifier="editContact" id="seg-2"/>
                    </connections>
                </viewController>
            </objects>
        </scene>"#,
	)
}

/// Three controllers, the last of which has no Storyboard ID.
pub fn storyboard_with_missing_id() -> String {
	storyboard(
		r#"        <scene sceneID="a">
            <objects>
                <viewController storyboardIdentifier="Login" id="a-1" customClass="LoginViewController"/>
            </objects>
        </scene>
        <scene sceneID="b">
            <objects>
                <tabBarController storyboardIdentifier="Tabs" id="b-1"/>
            </objects>
        </scene>
        <scene sceneID="c">
            <objects>
                <viewController id="c-1" customClass="OrphanViewController"/>
            </objects>
        </scene>"#,
	)
}

/// Write `files` (relative path, content) under `root`.
pub fn write_project(root: &Path, files: &[(&str, &str)]) -> std::io::Result<Vec<PathBuf>> {
	let mut written = Vec::with_capacity(files.len());
	for (relative, content) in files {
		let path = root.join(relative);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, content)?;
		written.push(path);
	}
	Ok(written)
}
