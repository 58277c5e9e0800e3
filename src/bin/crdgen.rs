use kube::CustomResourceExt;
use std::fs;
use std::path::Path;

use chain_backup_gateway::crd::{Backup, Restore};

fn main() {
    let crds_dir = Path::new("deploy/crds");
    fs::create_dir_all(crds_dir).expect("Failed to create deploy/crds directory");

    let backup_crd = serde_yaml::to_string(&Backup::crd()).expect("Failed to serialize Backup CRD");
    fs::write(crds_dir.join("backups.yaml"), backup_crd).expect("Failed to write Backup CRD");
    println!("Generated deploy/crds/backups.yaml");

    let restore_crd =
        serde_yaml::to_string(&Restore::crd()).expect("Failed to serialize Restore CRD");
    fs::write(crds_dir.join("restores.yaml"), restore_crd).expect("Failed to write Restore CRD");
    println!("Generated deploy/crds/restores.yaml");
}
