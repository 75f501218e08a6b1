fn main() {
    agri_admin_frontend::start();
}
